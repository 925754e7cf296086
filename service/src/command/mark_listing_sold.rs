//! [`Command`] for marking a [`Listing`] as sold.

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for marking a [`Listing`] as [`listing::Status::Sold`].
///
/// Reachable from any status and idempotent: marking an already sold
/// listing is a no-op acknowledgment.
#[derive(Clone, Copy, Debug)]
pub struct MarkListingSold {
    /// ID of the [`Listing`] to mark.
    pub id: listing::Id,
}

impl<Db, Nf> Command<MarkListingSold> for Service<Db, Nf>
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
        cmd: MarkListingSold,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let MarkListingSold { id } = cmd;

        let mut listing = self
            .storage()
            .execute(Select(By::<Option<Listing>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ListingNotExists(id))
            .map_err(tracerr::wrap!())?;

        if listing.status == listing::Status::Sold {
            return Ok(listing);
        }

        listing.status = listing::Status::Sold;

        self.storage()
            .execute(Update(listing.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(listing)
    }
}

/// Error of [`MarkListingSold`] [`Command`] execution.
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
    use crate::{
        command::{MarkListingSold, ToggleListingVisibility},
        domain::listing::Status,
        fixture, Command as _,
    };

    #[tokio::test]
    async fn marks_sold_from_any_status() {
        let service = fixture::service();
        let created = service
            .execute(fixture::create_listing("화성 토지", "화성시 1"))
            .await
            .unwrap();
        let hidden = service
            .execute(ToggleListingVisibility { id: created.id })
            .await
            .unwrap();
        assert_eq!(hidden.status, Status::Hidden);

        let sold = service
            .execute(MarkListingSold { id: created.id })
            .await
            .unwrap();
        assert_eq!(sold.status, Status::Sold);
    }

    #[tokio::test]
    async fn marking_twice_is_idempotent() {
        let service = fixture::service();
        let created = service
            .execute(fixture::create_listing("화성 토지", "화성시 1"))
            .await
            .unwrap();

        let first = service
            .execute(MarkListingSold { id: created.id })
            .await
            .unwrap();
        let second = service
            .execute(MarkListingSold { id: created.id })
            .await
            .unwrap();
        assert_eq!(first.status, Status::Sold);
        assert_eq!(second.status, Status::Sold);
    }
}
