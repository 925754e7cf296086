//! [`Command`] for submitting a new [`Consultation`].

use common::{
    operations::{By, Insert, Perform, Select},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{consultation, listing, Consultation, Listing, Phone},
    infra::{
        notify::{self, Notification},
        storage, Notifier, Storage,
    },
    Service,
};

use super::Command;

/// [`Command`] for submitting a new [`Consultation`] about a [`Listing`].
///
/// Anonymous: anyone may submit, and the name/phone non-emptiness is
/// enforced by the domain newtypes before this command exists. The listing
/// title is snapshotted from storage rather than trusted from the caller.
#[derive(Clone, Debug)]
pub struct SubmitConsultation {
    /// ID of the [`Listing`] the inquiry is about.
    pub listing_id: listing::Id,

    /// Name of the inquiring customer.
    pub customer_name: consultation::CustomerName,

    /// [`Phone`] of the inquiring customer.
    pub customer_phone: Phone,

    /// Free-text message of the inquiry, if any.
    pub message: Option<consultation::Message>,
}

impl<Db, Nf> Command<SubmitConsultation> for Service<Db, Nf>
where
    Db: Storage<
            Select<By<Option<Listing>, listing::Id>>,
            Ok = Option<Listing>,
            Err = Traced<storage::Error>,
        > + Storage<Insert<Consultation>, Err = Traced<storage::Error>>,
    Nf: Notifier<Perform<Notification>, Err = Traced<notify::Error>>,
{
    type Ok = Consultation;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SubmitConsultation,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitConsultation {
            listing_id,
            customer_name,
            customer_phone,
            message,
        } = cmd;

        let listing = self
            .storage()
            .execute(Select(By::<Option<Listing>, _>::new(listing_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ListingNotExists(listing_id))
            .map_err(tracerr::wrap!())?;

        let consultation = Consultation {
            id: consultation::Id::new(),
            listing_id,
            listing_title: listing.title,
            customer_name,
            customer_phone,
            message,
            status: consultation::Status::default(),
            created_at: DateTime::now().coerce(),
        };

        self.storage()
            .execute(Insert(consultation.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        // Fire-and-forget: a failed notification never rolls back the saved
        // record.
        if let Err(e) = self
            .notifier()
            .execute(Perform(Notification::consultation_received(
                &consultation,
            )))
            .await
        {
            tracing::warn!("failed to deliver consultation notification: {e}");
        }

        Ok(consultation)
    }
}

/// Error of [`SubmitConsultation`] [`Command`] execution.
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
        command::SubmitConsultation,
        domain::{consultation, Consultation},
        fixture, Command as _,
    };

    use super::ExecutionError;

    #[tokio::test]
    async fn prepends_submission_and_snapshots_title() {
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
        let second = service
            .execute(SubmitConsultation {
                listing_id: listing.id,
                customer_name: "김영희".parse().unwrap(),
                customer_phone: "010-9876-5432".parse().unwrap(),
                message: Some("주말 연락 부탁".parse().unwrap()),
            })
            .await
            .unwrap();

        assert_eq!(first.status, consultation::Status::Pending);
        assert_eq!(first.listing_title.as_ref(), "화성 토지");

        let stored: Vec<Consultation> = service
            .storage()
            .execute(Select(By::<Vec<Consultation>, _>::new(())))
            .await
            .unwrap();
        assert_eq!(stored.len(), 2);
        // Newest-first: the latest submission sits at the head.
        assert_eq!(stored[0].id, second.id);
        assert_eq!(stored[1].id, first.id);
    }

    #[tokio::test]
    async fn reports_unknown_listing_and_saves_nothing() {
        let service = fixture::service();

        let err = service
            .execute(SubmitConsultation {
                listing_id: crate::domain::listing::Id::new(),
                customer_name: "홍길동".parse().unwrap(),
                customer_phone: "010-1234-5678".parse().unwrap(),
                message: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::ListingNotExists(_)));

        let stored: Vec<Consultation> = service
            .storage()
            .execute(Select(By::<Vec<Consultation>, _>::new(())))
            .await
            .unwrap();
        assert!(stored.is_empty());
    }
}
