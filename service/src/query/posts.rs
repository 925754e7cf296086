//! [`Query`] collection related to multiple [`Post`]s.

use common::operations::By;

use crate::domain::Post;

use super::StorageQuery;

/// Queries all [`Post`]s in their stored (newest-first) order.
pub type List = StorageQuery<By<Vec<Post>, ()>>;
