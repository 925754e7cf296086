//! [`Query`] collection related to multiple [`Listing`]s.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    infra::{storage, Storage},
    read,
    Service,
};

use super::Query;

/// Queries the public catalog of [`Listing`]s.
///
/// The [`listing::Status::Active`]-only baseline is applied before the
/// provided filter (whose own status criterion is ignored), and the stored
/// order is preserved. An empty result is a valid outcome.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// [`read::listing::list::Filter`] to apply.
    pub filter: read::listing::list::Filter,
}

impl<Db, Nf> Query<Catalog> for Service<Db, Nf>
where
    Db: Storage<
        Select<By<Vec<Listing>, ()>>,
        Ok = Vec<Listing>,
        Err = Traced<storage::Error>,
    >,
{
    type Ok = Vec<Listing>;
    type Err = Traced<storage::Error>;

    async fn execute(&self, query: Catalog) -> Result<Self::Ok, Self::Err> {
        let Catalog { filter } = query;

        Ok(self
            .storage()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .filter(|l| {
                l.status == listing::Status::Active && filter.matches(l)
            })
            .collect())
    }
}

/// Queries the admin inventory of [`Listing`]s.
///
/// No visibility baseline: the filter alone decides, including its status
/// criterion.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    /// [`read::listing::list::Filter`] to apply.
    pub filter: read::listing::list::Filter,
}

impl<Db, Nf> Query<Inventory> for Service<Db, Nf>
where
    Db: Storage<
        Select<By<Vec<Listing>, ()>>,
        Ok = Vec<Listing>,
        Err = Traced<storage::Error>,
    >,
{
    type Ok = Vec<Listing>;
    type Err = Traced<storage::Error>;

    async fn execute(&self, query: Inventory) -> Result<Self::Ok, Self::Err> {
        let Inventory { filter } = query;

        Ok(self
            .storage()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .filter(|l| filter.matches(l))
            .collect())
    }
}

/// Queries the per-status tally of all [`Listing`]s for the dashboard cards.
#[derive(Clone, Copy, Debug)]
pub struct StatusCounts;

impl<Db, Nf> Query<StatusCounts> for Service<Db, Nf>
where
    Db: Storage<
        Select<By<Vec<Listing>, ()>>,
        Ok = Vec<Listing>,
        Err = Traced<storage::Error>,
    >,
{
    type Ok = read::listing::StatusCounts;
    type Err = Traced<storage::Error>;

    async fn execute(&self, _: StatusCounts) -> Result<Self::Ok, Self::Err> {
        self.storage()
            .execute(Select(By::new(())))
            .await
            .map(|listings| read::listing::StatusCounts::tally(&listings))
            .map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{MarkListingSold, ToggleListingVisibility},
        domain::listing,
        fixture, read, Command as _, Query as _,
    };

    use super::{Catalog, Inventory, StatusCounts};

    #[tokio::test]
    async fn catalog_excludes_hidden_and_sold() {
        let service = fixture::service();
        let visible = service
            .execute(fixture::create_listing("노출 매물", "화성시 1"))
            .await
            .unwrap();
        let hidden = service
            .execute(fixture::create_listing("숨김 매물", "화성시 2"))
            .await
            .unwrap();
        let sold = service
            .execute(fixture::create_listing("완료 매물", "화성시 3"))
            .await
            .unwrap();
        drop(
            service
                .execute(ToggleListingVisibility { id: hidden.id })
                .await,
        );
        drop(service.execute(MarkListingSold { id: sold.id }).await);

        let catalog = service.execute(Catalog::default()).await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, visible.id);
    }

    #[tokio::test]
    async fn catalog_preserves_stored_order() {
        let service = fixture::service();
        let mut ids = Vec::new();
        for (title, address) in [
            ("첫째", "화성시 1"),
            ("둘째", "화성시 2"),
            ("셋째", "화성시 3"),
        ] {
            ids.push(
                service
                    .execute(fixture::create_listing(title, address))
                    .await
                    .unwrap()
                    .id,
            );
        }

        let catalog = service.execute(Catalog::default()).await.unwrap();
        assert_eq!(
            catalog.iter().map(|l| l.id).collect::<Vec<_>>(),
            ids,
        );
    }

    #[tokio::test]
    async fn inventory_filters_by_status_without_baseline() {
        let service = fixture::service();
        let visible = service
            .execute(fixture::create_listing("노출 매물", "화성시 1"))
            .await
            .unwrap();
        let hidden = service
            .execute(fixture::create_listing("숨김 매물", "화성시 2"))
            .await
            .unwrap();
        drop(
            service
                .execute(ToggleListingVisibility { id: hidden.id })
                .await,
        );

        let everything =
            service.execute(Inventory::default()).await.unwrap();
        assert_eq!(everything.len(), 2);

        let hidden_only = service
            .execute(Inventory {
                filter: read::listing::list::Filter {
                    status: Some(listing::Status::Hidden),
                    ..read::listing::list::Filter::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(hidden_only.len(), 1);
        assert_eq!(hidden_only[0].id, hidden.id);
        drop(visible);
    }

    #[tokio::test]
    async fn tallies_statuses() {
        let service = fixture::service();
        for (title, address) in [("하나", "화성시 1"), ("둘", "화성시 2")] {
            drop(
                service
                    .execute(fixture::create_listing(title, address))
                    .await,
            );
        }

        let counts = service.execute(StatusCounts).await.unwrap();
        assert_eq!(counts.total, 2);
        assert_eq!(counts.active, 2);
    }
}
