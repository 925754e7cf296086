//! [`Command`] for deleting a [`Consultation`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{consultation, Consultation},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for permanently deleting a [`Consultation`].
///
/// Any confirmation prompting happens in the caller; the command itself is
/// unconditional.
#[derive(Clone, Copy, Debug)]
pub struct DeleteConsultation {
    /// ID of the [`Consultation`] to delete.
    pub id: consultation::Id,
}

impl<Db, Nf> Command<DeleteConsultation> for Service<Db, Nf>
where
    Db: Storage<
            Select<By<Option<Consultation>, consultation::Id>>,
            Ok = Option<Consultation>,
            Err = Traced<storage::Error>,
        > + Storage<Delete<consultation::Id>, Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteConsultation,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteConsultation { id } = cmd;

        self.storage()
            .execute(Select(By::<Option<Consultation>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ConsultationNotExists(id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        self.storage()
            .execute(Delete(id))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)
    }
}

/// Error of [`DeleteConsultation`] [`Command`] execution.
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
    use common::operations::{By, Select};

    use crate::{
        command::{DeleteConsultation, SubmitConsultation},
        domain::Consultation,
        fixture, Command as _,
    };

    use super::ExecutionError;

    #[tokio::test]
    async fn removes_consultation() {
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

        service
            .execute(DeleteConsultation { id: submitted.id })
            .await
            .unwrap();

        let stored: Vec<Consultation> = service
            .storage()
            .execute(Select(By::<Vec<Consultation>, _>::new(())))
            .await
            .unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn reports_unknown_consultation() {
        let service = fixture::service();

        let err = service
            .execute(DeleteConsultation {
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
