//! [`Command`] for toggling a [`Listing`] between visible and hidden.

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for toggling a [`Listing`] between [`listing::Status::Active`]
/// and [`listing::Status::Hidden`].
///
/// A [`listing::Status::Sold`] listing is not eligible: bringing it back
/// requires the explicit [`RestoreListing`] command.
///
/// [`RestoreListing`]: super::RestoreListing
#[derive(Clone, Copy, Debug)]
pub struct ToggleListingVisibility {
    /// ID of the [`Listing`] to toggle.
    pub id: listing::Id,
}

impl<Db, Nf> Command<ToggleListingVisibility> for Service<Db, Nf>
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
        cmd: ToggleListingVisibility,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ToggleListingVisibility { id } = cmd;

        let mut listing = self
            .storage()
            .execute(Select(By::<Option<Listing>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ListingNotExists(id))
            .map_err(tracerr::wrap!())?;

        listing.status = match listing.status {
            listing::Status::Active => listing::Status::Hidden,
            listing::Status::Hidden => listing::Status::Active,
            listing::Status::Sold => {
                return Err(tracerr::new!(E::ListingSold(id)));
            }
        };

        self.storage()
            .execute(Update(listing.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(listing)
    }
}

/// Error of [`ToggleListingVisibility`] [`Command`] execution.
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

    /// [`Listing`] is sold and cannot be toggled.
    #[display("`Listing(id: {_0})` is sold, restore it explicitly")]
    ListingSold(#[error(not(source))] listing::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{MarkListingSold, ToggleListingVisibility},
        domain::listing::Status,
        fixture, Command as _,
    };

    use super::ExecutionError;

    #[tokio::test]
    async fn flips_between_active_and_hidden() {
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

        let visible = service
            .execute(ToggleListingVisibility { id: created.id })
            .await
            .unwrap();
        assert_eq!(visible.status, Status::Active);
    }

    #[tokio::test]
    async fn refuses_sold_listing() {
        let service = fixture::service();
        let created = service
            .execute(fixture::create_listing("화성 토지", "화성시 1"))
            .await
            .unwrap();
        drop(service.execute(MarkListingSold { id: created.id }).await);

        let err = service
            .execute(ToggleListingVisibility { id: created.id })
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::ListingSold(_)));
    }

    #[tokio::test]
    async fn reports_unknown_listing() {
        let service = fixture::service();

        let err = service
            .execute(ToggleListingVisibility {
                id: crate::domain::listing::Id::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::ListingNotExists(_)));
    }
}
