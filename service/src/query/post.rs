//! [`Query`] collection related to a single [`Post`].

use common::operations::By;

use crate::domain::{post, Post};

use super::StorageQuery;

/// Queries a [`Post`] by its [`post::Id`].
pub type ById = StorageQuery<By<Option<Post>, post::Id>>;
