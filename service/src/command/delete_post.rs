//! [`Command`] for deleting a [`Post`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{post, Post},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for permanently deleting a blog [`Post`].
#[derive(Clone, Copy, Debug)]
pub struct DeletePost {
    /// ID of the [`Post`] to delete.
    pub id: post::Id,
}

impl<Db, Nf> Command<DeletePost> for Service<Db, Nf>
where
    Db: Storage<
            Select<By<Option<Post>, post::Id>>,
            Ok = Option<Post>,
            Err = Traced<storage::Error>,
        > + Storage<Delete<post::Id>, Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeletePost) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeletePost { id } = cmd;

        self.storage()
            .execute(Select(By::<Option<Post>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PostNotExists(id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        self.storage()
            .execute(Delete(id))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)
    }
}

/// Error of [`DeletePost`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    ///
    /// [`Storage`]: crate::infra::Storage
    #[display("`Storage` operation failed: {_0}")]
    #[from]
    Db(storage::Error),

    /// [`Post`] with the provided ID does not exist.
    #[display("`Post(id: {_0})` does not exist")]
    PostNotExists(#[error(not(source))] post::Id),
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};

    use crate::{
        command::{CreatePost, DeletePost},
        domain::Post,
        fixture, Command as _,
    };

    #[tokio::test]
    async fn removes_post() {
        let service = fixture::service();
        let created = service
            .execute(CreatePost {
                title: "공장 부지 고르는 법".parse().unwrap(),
                content: "입지가 절반이다".parse().unwrap(),
                excerpt: None,
            })
            .await
            .unwrap();

        service.execute(DeletePost { id: created.id }).await.unwrap();

        let stored: Vec<Post> = service
            .storage()
            .execute(Select(By::<Vec<Post>, _>::new(())))
            .await
            .unwrap();
        assert!(stored.is_empty());
    }
}
