//! Service contains the business logic of the application.

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
#[cfg(test)]
mod fixture;
pub mod infra;
pub mod query;
pub mod read;

use derive_more::Debug;
use secrecy::SecretString;

use crate::domain::listing;

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// [JWT] encoding key for admin session tokens.
    ///
    /// [JWT]: https://datatracker.ietf.org/doc/html/rfc7519
    #[debug(skip)]
    pub jwt_encoding_key: jsonwebtoken::EncodingKey,

    /// [JWT] decoding key for admin session tokens.
    ///
    /// [JWT]: https://datatracker.ietf.org/doc/html/rfc7519
    #[debug(skip)]
    pub jwt_decoding_key: jsonwebtoken::DecodingKey,

    /// Shared admin password, compared verbatim on login.
    #[debug(skip)]
    pub admin_password: SecretString,

    /// Process-wide default brokerage [`listing::Disclosure`] fields,
    /// filling the gaps of per-listing ones.
    pub disclosure: listing::Disclosure,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db, Nf> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Storage`] of this [`Service`].
    ///
    /// [`Storage`]: infra::Storage
    storage: Db,

    /// [`Notifier`] of this [`Service`].
    ///
    /// [`Notifier`]: infra::Notifier
    notifier: Nf,
}

impl<Db, Nf> Service<Db, Nf> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(config: Config, storage: Db, notifier: Nf) -> Self {
        Self {
            config,
            storage,
            notifier,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the [`Storage`] of this [`Service`].
    ///
    /// [`Storage`]: infra::Storage
    #[must_use]
    pub fn storage(&self) -> &Db {
        &self.storage
    }

    /// Returns the [`Notifier`] of this [`Service`].
    ///
    /// [`Notifier`]: infra::Notifier
    #[must_use]
    pub fn notifier(&self) -> &Nf {
        &self.notifier
    }
}
