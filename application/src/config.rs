//! [`Config`]-related definitions.

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use secrecy::SecretString;
use serde::Deserialize;
use service::{domain, infra::notify};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Service configuration.
    pub service: Service,

    /// Storage configuration.
    pub storage: Storage,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Service configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// [JWT] secret for admin session tokens.
    ///
    /// [JWT]: https://wikipedia.org/wiki/JSON_Web_Token
    #[default("secret".to_owned())]
    pub jwt_secret: String,

    /// Shared admin password, compared verbatim on login.
    #[default("admin1234".to_owned())]
    pub admin_password: String,

    /// Process-wide default brokerage disclosure fields.
    pub disclosure: Disclosure,

    /// Telegram notification configuration.
    pub telegram: Telegram,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        let Service {
            jwt_secret,
            admin_password,
            disclosure,
            telegram: _,
        } = value;
        Self {
            jwt_encoding_key: jsonwebtoken::EncodingKey::from_secret(
                jwt_secret.as_bytes(),
            ),
            jwt_decoding_key: jsonwebtoken::DecodingKey::from_secret(
                jwt_secret.as_bytes(),
            ),
            admin_password: SecretString::from(admin_password),
            disclosure: disclosure.into(),
        }
    }
}

/// Process-wide default brokerage disclosure fields.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Disclosure {
    /// Name of the brokerage agency.
    pub agency_name: Option<String>,

    /// Name of the registered agent.
    pub agent_name: Option<String>,

    /// Brokerage registration number.
    pub registration_no: Option<String>,

    /// Address of the brokerage agency.
    pub agency_address: Option<String>,

    /// Phone of the brokerage agency.
    pub agency_phone: Option<String>,
}

impl From<Disclosure> for domain::listing::Disclosure {
    fn from(value: Disclosure) -> Self {
        let Disclosure {
            agency_name,
            agent_name,
            registration_no,
            agency_address,
            agency_phone,
        } = value;
        Self {
            agency_name: agency_name.and_then(|v| v.parse().ok()),
            agent_name: agent_name.and_then(|v| v.parse().ok()),
            registration_no: registration_no.and_then(|v| v.parse().ok()),
            agency_address: agency_address.and_then(|v| v.parse().ok()),
            agency_phone: agency_phone.and_then(|v| v.parse().ok()),
        }
    }
}

/// Telegram notification configuration.
///
/// Without both credentials the notifier degrades to a logged no-op.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Telegram {
    /// Bot API token.
    pub bot_token: Option<String>,

    /// Chat ID to deliver messages to.
    pub chat_id: Option<String>,
}

impl Telegram {
    /// Converts this configuration into [`notify::telegram::Config`]
    /// credentials, if both parts are present.
    #[must_use]
    pub fn into_credentials(self) -> Option<notify::telegram::Config> {
        Some(notify::telegram::Config {
            bot_token: SecretString::from(self.bot_token?),
            chat_id: self.chat_id?,
        })
    }
}

/// Storage configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Storage {
    /// Path of the JSON document file holding all the collections.
    #[default("brokerage.json".to_owned())]
    pub file: String,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
