//! [`Post`]-related [`Storage`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{post, Post},
    infra::{
        storage::{self, json::key, JsonFile},
        Storage,
    },
};

impl Storage<Select<By<Vec<Post>, ()>>> for JsonFile {
    type Ok = Vec<Post>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Post>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.load(key::POSTS).await
    }
}

impl Storage<Select<By<Option<Post>, post::Id>>> for JsonFile {
    type Ok = Option<Post>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Post>, post::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .load::<Vec<Post>>(key::POSTS)
            .await?
            .into_iter()
            .find(|p| p.id == id))
    }
}

impl Storage<Insert<Post>> for JsonFile {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Insert(post): Insert<Post>,
    ) -> Result<Self::Ok, Self::Err> {
        self.modify::<Vec<Post>, _>(key::POSTS, |posts| {
            // Newest-first, same as consultations.
            posts.insert(0, post);
        })
        .await
    }
}

impl Storage<Update<Post>> for JsonFile {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Update(post): Update<Post>,
    ) -> Result<Self::Ok, Self::Err> {
        self.modify::<Vec<Post>, _>(key::POSTS, |posts| {
            if let Some(slot) = posts.iter_mut().find(|p| p.id == post.id) {
                *slot = post;
            }
        })
        .await
    }
}

impl Storage<Delete<post::Id>> for JsonFile {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Delete(id): Delete<post::Id>,
    ) -> Result<Self::Ok, Self::Err> {
        self.modify::<Vec<Post>, _>(key::POSTS, |posts| {
            posts.retain(|p| p.id != id);
        })
        .await
    }
}
