//! [`Consultation`]-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{api, api::scalar, Context};

/// A customer inquiry about a `Listing`.
///
/// Served on admin paths only.
#[derive(Clone, Debug, From)]
pub struct Consultation(domain::Consultation);

/// A customer inquiry about a `Listing`.
#[graphql_object(context = Context)]
impl Consultation {
    /// Unique identifier of this `Consultation`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Identifier of the `Listing` this `Consultation` is about.
    #[must_use]
    pub fn listing_id(&self) -> api::listing::Id {
        self.0.listing_id.into()
    }

    /// Title snapshot of the `Listing` taken at submission time.
    #[must_use]
    pub fn listing_title(&self) -> api::listing::Title {
        self.0.listing_title.clone().into()
    }

    /// Name of the inquiring customer.
    #[must_use]
    pub fn customer_name(&self) -> CustomerName {
        self.0.customer_name.clone().into()
    }

    /// Phone of the inquiring customer.
    #[must_use]
    pub fn customer_phone(&self) -> scalar::Phone {
        self.0.customer_phone.clone().into()
    }

    /// Free-text message of the inquiry, if any.
    #[must_use]
    pub fn message(&self) -> Option<Message> {
        self.0.message.clone().map(Into::into)
    }

    /// Processing status of this `Consultation`.
    #[must_use]
    pub fn status(&self) -> Status {
        self.0.status.into()
    }

    /// `DateTime` when this `Consultation` was submitted.
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of a `Consultation`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::consultation::Id)]
#[into(domain::consultation::Id)]
#[graphql(name = "ConsultationId", transparent)]
pub struct Id(Uuid);

/// Name (or business name) of an inquiring customer.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "CustomerName",
    with = scalar::Via::<domain::consultation::CustomerName>,
)]
pub struct CustomerName(domain::consultation::CustomerName);

/// Free-text message of a `Consultation`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ConsultationMessage",
    with = scalar::Via::<domain::consultation::Message>,
)]
pub struct Message(domain::consultation::Message);

/// Processing status of a `Consultation`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "ConsultationStatus")]
pub enum Status {
    /// Awaiting a reply from the brokerage.
    Pending,

    /// Handled by the brokerage.
    Completed,
}

impl From<domain::consultation::Status> for Status {
    fn from(status: domain::consultation::Status) -> Self {
        use domain::consultation::Status as S;
        match status {
            S::Pending => Self::Pending,
            S::Completed => Self::Completed,
        }
    }
}
