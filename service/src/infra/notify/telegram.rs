//! Telegram bot [`Notifier`] implementation.

use common::operations::Perform;
use secrecy::{ExposeSecret as _, SecretString};
use serde::Serialize;
use tracerr::Traced;

use crate::infra::notify::{self, Notification, Notifier};

/// [`Notifier`] delivering messages through the Telegram Bot API.
///
/// Constructed without credentials it degrades to a logged no-op instead of
/// erroring.
#[derive(Clone, Debug)]
pub struct Telegram {
    /// HTTP client performing the requests.
    http: reqwest::Client,

    /// Bot credentials, if configured.
    config: Option<Config>,
}

/// [`Telegram`] credentials.
#[derive(Clone, Debug)]
pub struct Config {
    /// Bot API token.
    pub bot_token: SecretString,

    /// Chat ID to deliver messages to.
    pub chat_id: String,
}

impl Telegram {
    /// Creates a new [`Telegram`] notifier with the provided credentials
    /// (or a no-op one without them).
    #[must_use]
    pub fn new(config: Option<Config>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

/// `sendMessage` request body of the Telegram Bot API.
#[derive(Clone, Copy, Debug, Serialize)]
struct SendMessage<'r> {
    /// Chat to deliver the message to.
    chat_id: &'r str,

    /// Text of the message.
    text: &'r str,
}

impl Notifier<Perform<Notification>> for Telegram {
    type Ok = ();
    type Err = Traced<notify::Error>;

    async fn execute(
        &self,
        Perform(notification): Perform<Notification>,
    ) -> Result<Self::Ok, Self::Err> {
        let Some(config) = &self.config else {
            tracing::debug!("no Telegram credentials, skipping notification");
            return Ok(());
        };

        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            config.bot_token.expose_secret(),
        );
        self.http
            .post(&url)
            .json(&SendMessage {
                chat_id: &config.chat_id,
                text: notification.text(),
            })
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(tracerr::from_and_wrap!(=> notify::Error))
            .map(drop)
    }
}
