//! [`Listing`]-related [`Storage`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    infra::{
        storage::{self, json::key, JsonFile},
        Storage,
    },
};

impl Storage<Select<By<Vec<Listing>, ()>>> for JsonFile {
    type Ok = Vec<Listing>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Listing>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.load(key::LISTINGS).await
    }
}

impl Storage<Select<By<Option<Listing>, listing::Id>>> for JsonFile {
    type Ok = Option<Listing>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Listing>, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .load::<Vec<Listing>>(key::LISTINGS)
            .await?
            .into_iter()
            .find(|l| l.id == id))
    }
}

impl Storage<Insert<Listing>> for JsonFile {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Insert(listing): Insert<Listing>,
    ) -> Result<Self::Ok, Self::Err> {
        self.modify::<Vec<Listing>, _>(key::LISTINGS, |listings| {
            listings.push(listing);
        })
        .await
    }
}

impl Storage<Update<Listing>> for JsonFile {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Update(listing): Update<Listing>,
    ) -> Result<Self::Ok, Self::Err> {
        self.modify::<Vec<Listing>, _>(key::LISTINGS, |listings| {
            if let Some(slot) =
                listings.iter_mut().find(|l| l.id == listing.id)
            {
                *slot = listing;
            }
        })
        .await
    }
}

impl Storage<Delete<listing::Id>> for JsonFile {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Delete(id): Delete<listing::Id>,
    ) -> Result<Self::Ok, Self::Err> {
        self.modify::<Vec<Listing>, _>(key::LISTINGS, |listings| {
            listings.retain(|l| l.id != id);
        })
        .await
    }
}
