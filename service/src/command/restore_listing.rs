//! [`Command`] for restoring a sold [`Listing`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for restoring a [`listing::Status::Sold`] [`Listing`] back to
/// [`listing::Status::Active`].
///
/// The only way back out of the sold status; the visibility toggle refuses
/// sold listings.
#[derive(Clone, Copy, Debug)]
pub struct RestoreListing {
    /// ID of the [`Listing`] to restore.
    pub id: listing::Id,
}

impl<Db, Nf> Command<RestoreListing> for Service<Db, Nf>
where
    Db: Storage<
            Select<By<Option<Listing>, listing::Id>>,
            Ok = Option<Listing>,
            Err = Traced<storage::Error>,
        > + Storage<Update<Listing>, Err = Traced<storage::Error>>,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: RestoreListing,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RestoreListing { id } = cmd;

        let mut listing = self
            .storage()
            .execute(Select(By::<Option<Listing>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ListingNotExists(id))
            .map_err(tracerr::wrap!())?;

        if listing.status != listing::Status::Sold {
            return Err(tracerr::new!(E::ListingNotSold(id)));
        }

        listing.status = listing::Status::Active;

        self.storage()
            .execute(Update(listing.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(listing)
    }
}

/// Error of [`RestoreListing`] [`Command`] execution.
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

    /// [`Listing`] is not sold.
    #[display("`Listing(id: {_0})` is not sold")]
    ListingNotSold(#[error(not(source))] listing::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{MarkListingSold, RestoreListing},
        domain::listing::Status,
        fixture, Command as _,
    };

    use super::ExecutionError;

    #[tokio::test]
    async fn restores_sold_listing_to_active() {
        let service = fixture::service();
        let created = service
            .execute(fixture::create_listing("화성 토지", "화성시 1"))
            .await
            .unwrap();
        drop(service.execute(MarkListingSold { id: created.id }).await);

        let restored = service
            .execute(RestoreListing { id: created.id })
            .await
            .unwrap();
        assert_eq!(restored.status, Status::Active);
    }

    #[tokio::test]
    async fn refuses_listing_that_is_not_sold() {
        let service = fixture::service();
        let created = service
            .execute(fixture::create_listing("화성 토지", "화성시 1"))
            .await
            .unwrap();

        let err = service
            .execute(RestoreListing { id: created.id })
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::ListingNotSold(_)));
    }
}
