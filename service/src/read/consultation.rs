//! [`Consultation`]-related read definitions.

use derive_more::{From, Into};

use crate::domain::{consultation, Consultation};

/// Number of [`consultation::Status::Pending`] [`Consultation`]s, rendered
/// as the dashboard badge.
#[derive(Clone, Copy, Debug, Eq, From, Into, PartialEq)]
pub struct PendingCount(usize);

impl PendingCount {
    /// Tallies the pending entries among the given [`Consultation`]s.
    pub fn tally<'c>(
        consultations: impl IntoIterator<Item = &'c Consultation>,
    ) -> Self {
        Self(
            consultations
                .into_iter()
                .filter(|c| c.status == consultation::Status::Pending)
                .count(),
        )
    }
}
