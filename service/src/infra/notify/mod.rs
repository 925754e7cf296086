//! Notification collaborator implementations.

pub mod telegram;

use derive_more::{Display, Error as StdError, From};

use crate::domain::Consultation;

pub use self::telegram::Telegram;

/// Notification operation executor.
pub use common::Handler as Notifier;

/// Outbound notification text.
#[derive(Clone, Debug)]
pub struct Notification(String);

impl Notification {
    /// Composes a [`Notification`] about a newly submitted [`Consultation`].
    #[must_use]
    pub fn consultation_received(consultation: &Consultation) -> Self {
        Self(format!(
            "🔔 새로운 상담 문의\n\n\
             🏢 매물: {}\n\
             👤 고객명: {}\n\
             📞 연락처: {}\n\
             💬 문의내용: {}\n\n\
             🔗 매물 ID: {}",
            consultation.listing_title,
            consultation.customer_name,
            consultation.customer_phone,
            consultation.message.as_ref().map_or("없음", AsRef::as_ref),
            consultation.listing_id,
        ))
    }

    /// Returns the text of this [`Notification`].
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

/// [`Notifier`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// HTTP delivery failed.
    #[display("HTTP request failed: {_0}")]
    Http(reqwest::Error),
}

#[cfg(test)]
mod spec {
    use common::DateTime;

    use crate::domain::{consultation, listing, Consultation};

    use super::Notification;

    #[test]
    fn renders_every_consultation_field() {
        let consultation = Consultation {
            id: consultation::Id::new(),
            listing_id: listing::Id::new(),
            listing_title: "화성 공장 매매".parse().unwrap(),
            customer_name: "홍길동".parse().unwrap(),
            customer_phone: "010-1234-5678".parse().unwrap(),
            message: Some("주말에 연락 부탁드립니다".parse().unwrap()),
            status: consultation::Status::default(),
            created_at: DateTime::now().coerce(),
        };

        let text = Notification::consultation_received(&consultation);
        assert!(text.text().contains("화성 공장 매매"));
        assert!(text.text().contains("홍길동"));
        assert!(text.text().contains("010-1234-5678"));
        assert!(text.text().contains("주말에 연락 부탁드립니다"));
    }
}
