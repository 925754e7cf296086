//! GraphQL API definitions.

pub mod consultation;
pub mod listing;
mod mutation;
pub mod post;
mod query;
pub mod scalar;

use crate::Context;

pub use self::{
    consultation::Consultation, listing::Listing, mutation::Mutation,
    post::Post, query::Query,
};

/// GraphQL schema.
pub type Schema = juniper::RootNode<
    'static,
    Query,
    Mutation,
    juniper::EmptySubscription<Context>,
>;
