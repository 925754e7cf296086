//! JSON document file [`Storage`] implementation.
//!
//! Collections are held as whole-collection JSON blobs under fixed keys of
//! a string-to-string cell map; the map persists to a single document file
//! after every mutation. No partial updates and no transactions: mutations
//! hold the write lock for the whole read-modify-write cycle, so each one
//! is atomic from the caller's perspective.

mod impls;

use std::{collections::HashMap, io, path::PathBuf, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracerr::Traced;

use crate::infra::storage;
#[cfg(doc)]
use crate::infra::Storage;

/// Keys of the stored collections.
pub mod key {
    /// Cell holding all the listings.
    pub const LISTINGS: &str = "listings";

    /// Cell holding all the consultations.
    pub const CONSULTATIONS: &str = "consultations";

    /// Cell holding all the blog posts.
    pub const POSTS: &str = "posts";
}

/// [`Storage`] backed by a single JSON document file.
#[derive(Clone, Debug)]
pub struct JsonFile(Arc<Inner>);

/// Inner state of a [`JsonFile`].
#[derive(Debug)]
struct Inner {
    /// Path of the backing document file, if any.
    path: Option<PathBuf>,

    /// Cells holding each collection as a serialized JSON blob.
    cells: RwLock<HashMap<String, String>>,
}

impl JsonFile {
    /// Opens a [`JsonFile`] backed by the document file at the provided
    /// `path`, loading its current contents if the file exists.
    ///
    /// # Errors
    ///
    /// If the file cannot be read or holds a malformed document.
    pub async fn open(
        path: impl Into<PathBuf>,
    ) -> Result<Self, Traced<storage::Error>> {
        let path = path.into();
        let cells = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(tracerr::from_and_wrap!(=> storage::Error))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(tracerr::new!(storage::Error::from(e)));
            }
        };

        Ok(Self(Arc::new(Inner {
            path: Some(path),
            cells: RwLock::new(cells),
        })))
    }

    /// Creates a [`JsonFile`] holding its cells in memory only.
    ///
    /// Nothing is persisted to disk; intended for tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self(Arc::new(Inner {
            path: None,
            cells: RwLock::new(HashMap::new()),
        }))
    }

    /// Reads the collection stored under the given `key`.
    ///
    /// A missing cell yields the collection's default (empty) value.
    async fn load<T>(&self, key: &str) -> Result<T, Traced<storage::Error>>
    where
        T: DeserializeOwned + Default,
    {
        self.0
            .cells
            .read()
            .await
            .get(key)
            .map(|blob| serde_json::from_str(blob))
            .transpose()
            .map_err(tracerr::from_and_wrap!(=> storage::Error))
            .map(Option::unwrap_or_default)
    }

    /// Applies the given `mutate` function to the collection stored under
    /// the given `key` and persists the result.
    async fn modify<T, R>(
        &self,
        key: &str,
        mutate: impl FnOnce(&mut T) -> R,
    ) -> Result<R, Traced<storage::Error>>
    where
        T: Default + DeserializeOwned + Serialize,
    {
        let mut cells = self.0.cells.write().await;

        let mut collection = cells
            .get(key)
            .map(|blob| serde_json::from_str::<T>(blob))
            .transpose()
            .map_err(tracerr::from_and_wrap!(=> storage::Error))?
            .unwrap_or_default();
        let out = mutate(&mut collection);

        let blob = serde_json::to_string(&collection)
            .map_err(tracerr::from_and_wrap!(=> storage::Error))?;
        drop(cells.insert(key.to_owned(), blob));

        if let Some(path) = &self.0.path {
            let document = serde_json::to_string_pretty(&*cells)
                .map_err(tracerr::from_and_wrap!(=> storage::Error))?;
            tokio::fs::write(path, document)
                .await
                .map_err(tracerr::from_and_wrap!(=> storage::Error))?;
        }

        Ok(out)
    }
}
