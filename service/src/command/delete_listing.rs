//! [`Command`] for permanently deleting a [`Listing`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for permanently deleting a [`Listing`].
///
/// Valid from any status; there is no tombstone and no way back.
#[derive(Clone, Copy, Debug)]
pub struct DeleteListing {
    /// ID of the [`Listing`] to delete.
    pub id: listing::Id,
}

impl<Db, Nf> Command<DeleteListing> for Service<Db, Nf>
where
    Db: Storage<
            Select<By<Option<Listing>, listing::Id>>,
            Ok = Option<Listing>,
            Err = Traced<storage::Error>,
        > + Storage<Delete<listing::Id>, Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteListing,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteListing { id } = cmd;

        self.storage()
            .execute(Select(By::<Option<Listing>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ListingNotExists(id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        self.storage()
            .execute(Delete(id))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)
    }
}

/// Error of [`DeleteListing`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    ///
    /// [`Storage`]: crate::infra::Storage
    #[display("`Storage` operation failed: {_0}")]
    #[from]
    Db(storage::Error),

    /// [`Listing`] with the provided ID does not exist.
    #[display("`Listing(id: {_0})` does not exist")]
    ListingNotExists(#[error(not(source))] listing::Id),
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};

    use crate::{
        command::DeleteListing,
        domain::{listing, Listing},
        fixture, Command as _,
    };

    use super::ExecutionError;

    #[tokio::test]
    async fn removes_listing_permanently() {
        let service = fixture::service();
        let created = service
            .execute(fixture::create_listing("화성 토지", "화성시 1"))
            .await
            .unwrap();

        service
            .execute(DeleteListing { id: created.id })
            .await
            .unwrap();

        let stored: Option<Listing> = service
            .storage()
            .execute(Select(By::new(created.id)))
            .await
            .unwrap();
        assert!(stored.is_none());
    }

    #[tokio::test]
    async fn reports_unknown_listing() {
        let service = fixture::service();

        let err = service
            .execute(DeleteListing {
                id: listing::Id::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::ListingNotExists(_)));
    }
}
