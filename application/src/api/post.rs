//! [`Post`]-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{api::scalar, Context};

/// A blog article authored by the brokerage.
#[derive(Clone, Debug, From)]
pub struct Post(domain::Post);

/// A blog article authored by the brokerage.
#[graphql_object(context = Context)]
impl Post {
    /// Unique identifier of this `Post`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Title of this `Post`.
    #[must_use]
    pub fn title(&self) -> Title {
        self.0.title.clone().into()
    }

    /// Content of this `Post`.
    #[must_use]
    pub fn content(&self) -> Content {
        self.0.content.clone().into()
    }

    /// Excerpt of this `Post` shown in list views.
    #[must_use]
    pub fn excerpt(&self) -> Excerpt {
        self.0.excerpt.clone().into()
    }

    /// `DateTime` when this `Post` was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of a `Post`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::post::Id)]
#[into(domain::post::Id)]
#[graphql(name = "PostId", transparent)]
pub struct Id(Uuid);

/// Title of a `Post`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "PostTitle", with = scalar::Via::<domain::post::Title>)]
pub struct Title(domain::post::Title);

/// Content of a `Post`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "PostContent", with = scalar::Via::<domain::post::Content>)]
pub struct Content(domain::post::Content);

/// Excerpt of a `Post`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "PostExcerpt", with = scalar::Via::<domain::post::Excerpt>)]
pub struct Excerpt(domain::post::Excerpt);
