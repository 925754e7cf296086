//! [`Command`] for toggling the status of a [`Consultation`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{consultation, Consultation},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for toggling a [`Consultation`] between
/// [`consultation::Status::Pending`] and [`consultation::Status::Completed`].
#[derive(Clone, Copy, Debug)]
pub struct ToggleConsultationStatus {
    /// ID of the [`Consultation`] to toggle.
    pub id: consultation::Id,
}

impl<Db, Nf> Command<ToggleConsultationStatus> for Service<Db, Nf>
where
    Db: Storage<
            Select<By<Option<Consultation>, consultation::Id>>,
            Ok = Option<Consultation>,
            Err = Traced<storage::Error>,
        > + Storage<Update<Consultation>, Err = Traced<storage::Error>>,
{
    type Ok = Consultation;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: ToggleConsultationStatus,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ToggleConsultationStatus { id } = cmd;

        let mut consultation = self
            .storage()
            .execute(Select(By::<Option<Consultation>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ConsultationNotExists(id))
            .map_err(tracerr::wrap!())?;

        consultation.status = consultation.status.toggled();

        self.storage()
            .execute(Update(consultation.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(consultation)
    }
}

/// Error of [`ToggleConsultationStatus`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Consultation`] with the provided ID does not exist.
    #[display("`Consultation(id: {_0})` does not exist")]
    ConsultationNotExists(#[error(not(source))] consultation::Id),

    /// [`Storage`] error.
    ///
    /// [`Storage`]: crate::infra::Storage
    #[display("`Storage` operation failed: {_0}")]
    #[from]
    Db(storage::Error),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{SubmitConsultation, ToggleConsultationStatus},
        domain::consultation::Status,
        fixture, Command as _,
    };

    use super::ExecutionError;

    #[tokio::test]
    async fn toggling_twice_restores_original_status() {
        let service = fixture::service();
        let listing = service
            .execute(fixture::create_listing("화성 토지", "화성시 1"))
            .await
            .unwrap();
        let submitted = service
            .execute(SubmitConsultation {
                listing_id: listing.id,
                customer_name: "홍길동".parse().unwrap(),
                customer_phone: "010-1234-5678".parse().unwrap(),
                message: None,
            })
            .await
            .unwrap();

        let completed = service
            .execute(ToggleConsultationStatus { id: submitted.id })
            .await
            .unwrap();
        assert_eq!(completed.status, Status::Completed);

        let pending = service
            .execute(ToggleConsultationStatus { id: submitted.id })
            .await
            .unwrap();
        assert_eq!(pending.status, submitted.status);
    }

    #[tokio::test]
    async fn reports_unknown_consultation() {
        let service = fixture::service();

        let err = service
            .execute(ToggleConsultationStatus {
                id: crate::domain::consultation::Id::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::ConsultationNotExists(_),
        ));
    }
}
