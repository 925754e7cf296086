//! [`Query`] collection related to a single [`Listing`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    infra::{storage, Storage},
    Service,
};

use super::{Query, StorageQuery};

/// Queries a [`Listing`] by its [`listing::Id`], regardless of its status.
///
/// Admin use; public paths go through [`Published`].
pub type ById = StorageQuery<By<Option<Listing>, listing::Id>>;

/// Queries a publicly viewable [`Listing`] by its [`listing::Id`].
///
/// A hidden [`Listing`] is reported as absent, indistinguishable from a
/// nonexistent one; a sold one stays viewable.
#[derive(Clone, Copy, Debug)]
pub struct Published(pub listing::Id);

impl<Db, Nf> Query<Published> for Service<Db, Nf>
where
    Db: Storage<
        Select<By<Option<Listing>, listing::Id>>,
        Ok = Option<Listing>,
        Err = Traced<storage::Error>,
    >,
{
    type Ok = Option<Listing>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Published(id): Published,
    ) -> Result<Self::Ok, Self::Err> {
        self.storage()
            .execute(Select(By::new(id)))
            .await
            .map(|listing| listing.filter(Listing::is_published))
            .map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{MarkListingSold, ToggleListingVisibility},
        fixture, Command as _, Query as _,
    };

    use super::Published;

    #[tokio::test]
    async fn hides_hidden_listing_but_serves_sold_one() {
        let service = fixture::service();
        let listing = service
            .execute(fixture::create_listing("화성 토지", "화성시 1"))
            .await
            .unwrap();

        assert!(service
            .execute(Published(listing.id))
            .await
            .unwrap()
            .is_some());

        drop(
            service
                .execute(ToggleListingVisibility { id: listing.id })
                .await,
        );
        assert!(service
            .execute(Published(listing.id))
            .await
            .unwrap()
            .is_none());

        drop(
            service
                .execute(ToggleListingVisibility { id: listing.id })
                .await,
        );
        drop(service.execute(MarkListingSold { id: listing.id }).await);
        assert!(service
            .execute(Published(listing.id))
            .await
            .unwrap()
            .is_some());
    }
}
