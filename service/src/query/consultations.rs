//! [`Query`] collection related to [`Consultation`]s.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::Consultation,
    infra::{storage, Storage},
    read,
    Service,
};

use super::{Query, StorageQuery};

/// Queries all [`Consultation`]s in their stored (newest-first) order.
pub type List = StorageQuery<By<Vec<Consultation>, ()>>;

/// Queries the number of pending [`Consultation`]s for the dashboard badge.
#[derive(Clone, Copy, Debug)]
pub struct PendingCount;

impl<Db, Nf> Query<PendingCount> for Service<Db, Nf>
where
    Db: Storage<
        Select<By<Vec<Consultation>, ()>>,
        Ok = Vec<Consultation>,
        Err = Traced<storage::Error>,
    >,
{
    type Ok = read::consultation::PendingCount;
    type Err = Traced<storage::Error>;

    async fn execute(&self, _: PendingCount) -> Result<Self::Ok, Self::Err> {
        self.storage()
            .execute(Select(By::new(())))
            .await
            .map(|stored| read::consultation::PendingCount::tally(&stored))
            .map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{SubmitConsultation, ToggleConsultationStatus},
        fixture, Command as _, Query as _,
    };

    use super::PendingCount;

    #[tokio::test]
    async fn counts_only_pending_entries() {
        let service = fixture::service();
        let listing = service
            .execute(fixture::create_listing("화성 토지", "화성시 1"))
            .await
            .unwrap();

        let first = service
            .execute(SubmitConsultation {
                listing_id: listing.id,
                customer_name: "홍길동".parse().unwrap(),
                customer_phone: "010-1234-5678".parse().unwrap(),
                message: None,
            })
            .await
            .unwrap();
        drop(
            service
                .execute(SubmitConsultation {
                    listing_id: listing.id,
                    customer_name: "김영희".parse().unwrap(),
                    customer_phone: "010-9876-5432".parse().unwrap(),
                    message: None,
                })
                .await,
        );
        drop(
            service
                .execute(ToggleConsultationStatus { id: first.id })
                .await,
        );

        let count = service.execute(PendingCount).await.unwrap();
        assert_eq!(usize::from(count), 1);
    }
}
