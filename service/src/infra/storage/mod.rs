//! [`Storage`]-related implementations.

pub mod json;

use derive_more::{Display, Error as StdError, From};

pub use self::json::JsonFile;

/// Storage operation.
pub use common::Handler as Storage;

/// [`Storage`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to read or write the backing document file.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),

    /// Failed to encode or decode a stored collection.
    #[display("JSON error: {_0}")]
    Json(serde_json::Error),
}
