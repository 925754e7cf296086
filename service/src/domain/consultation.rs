//! [`Consultation`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, define_text, unit, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{listing, Phone};

/// Customer inquiry about a [`Listing`].
///
/// Submitted anonymously; immutable except for its [`Status`].
///
/// [`Listing`]: crate::domain::Listing
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Consultation {
    /// ID of this [`Consultation`].
    pub id: Id,

    /// ID of the [`Listing`] this [`Consultation`] is about.
    ///
    /// [`Listing`]: crate::domain::Listing
    pub listing_id: listing::Id,

    /// [`listing::Title`] snapshot taken when this [`Consultation`] was
    /// submitted.
    pub listing_title: listing::Title,

    /// Name of the inquiring customer.
    pub customer_name: CustomerName,

    /// [`Phone`] of the inquiring customer.
    pub customer_phone: Phone,

    /// Free-text [`Message`] of the inquiry, if any.
    pub message: Option<Message>,

    /// [`Status`] of this [`Consultation`].
    #[serde(default)]
    pub status: Status,

    /// [`DateTime`] when this [`Consultation`] was submitted.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub created_at: CreationDateTime,
}

/// ID of a [`Consultation`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_kind! {
    #[doc = "Processing status of a [`Consultation`]."]
    enum Status {
        #[doc = "Awaiting a reply from the brokerage."]
        Pending = 1,

        #[doc = "Handled by the brokerage."]
        Completed = 2,
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Pending
    }
}

impl Status {
    /// Returns the opposite [`Status`].
    ///
    /// Toggling twice restores the original value.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

define_text! {
    #[doc = "Name (or business name) of an inquiring customer."]
    CustomerName, max = 128
}

define_text! {
    #[doc = "Free-text message of a [`Consultation`]."]
    Message, max = 4096
}

/// [`DateTime`] when a [`Consultation`] was submitted.
pub type CreationDateTime = DateTimeOf<(Consultation, unit::Creation)>;

#[cfg(test)]
mod spec {
    use super::{CustomerName, Status};

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(Status::default(), Status::Pending);
    }

    #[test]
    fn toggling_status_twice_is_identity() {
        for status in [Status::Pending, Status::Completed] {
            assert_eq!(status.toggled().toggled(), status);
        }
    }

    #[test]
    fn customer_name_rejects_empty_input() {
        assert!(CustomerName::new("").is_none());
        assert!(CustomerName::new("  ").is_none());
        assert!(CustomerName::new("홍길동").is_some());
    }
}
