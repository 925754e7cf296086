//! [`Command`] for editing the admin-private memo of a [`Listing`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing, Phone},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for editing the admin-private memo and owner contact of a
/// [`Listing`].
///
/// Valid from any status and never changes it.
#[derive(Clone, Debug)]
pub struct SetListingMemo {
    /// ID of the [`Listing`] to annotate.
    pub id: listing::Id,

    /// New [`listing::Memo`], if any.
    pub memo: Option<listing::Memo>,

    /// New owner [`Phone`], if any.
    pub owner_phone: Option<Phone>,
}

impl<Db, Nf> Command<SetListingMemo> for Service<Db, Nf>
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
        cmd: SetListingMemo,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SetListingMemo {
            id,
            memo,
            owner_phone,
        } = cmd;

        let mut listing = self
            .storage()
            .execute(Select(By::<Option<Listing>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ListingNotExists(id))
            .map_err(tracerr::wrap!())?;

        listing.memo = memo;
        listing.owner_phone = owner_phone;

        self.storage()
            .execute(Update(listing.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(listing)
    }
}

/// Error of [`SetListingMemo`] [`Command`] execution.
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
    use crate::{command::SetListingMemo, fixture, Command as _};

    #[tokio::test]
    async fn sets_memo_without_touching_status() {
        let service = fixture::service();
        let created = service
            .execute(fixture::create_listing("화성 토지", "화성시 1"))
            .await
            .unwrap();

        let annotated = service
            .execute(SetListingMemo {
                id: created.id,
                memo: Some("가격 협의 가능".parse().unwrap()),
                owner_phone: Some("010-1234-5678".parse().unwrap()),
            })
            .await
            .unwrap();

        assert_eq!(annotated.status, created.status);
        assert_eq!(annotated.memo.unwrap().as_ref(), "가격 협의 가능");
        assert_eq!(
            annotated.owner_phone.unwrap().to_string(),
            "010-1234-5678",
        );
    }
}
