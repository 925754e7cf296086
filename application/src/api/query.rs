//! GraphQL [`Query`]s definitions.

use juniper::graphql_object;
use service::{query, read, Query as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Fetches the public catalog of `Listing`s matching the provided
    /// criteria.
    ///
    /// Hidden and sold listings are never part of the catalog. Omitted
    /// criteria mean "no constraint"; the stored order is preserved.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "listings",
            keyword = ?keyword.as_ref().map(ToString::to_string),
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn listings(
        keyword: Option<api::listing::Keyword>,
        kind: Option<api::listing::Kind>,
        deal: Option<api::listing::Deal>,
        region: Option<api::listing::Region>,
        price_range: Option<api::listing::PriceRange>,
        area_range: Option<api::listing::AreaRange>,
        ctx: &Context,
    ) -> Result<Vec<api::Listing>, Error> {
        ctx.service()
            .execute(query::listings::Catalog {
                filter: read::listing::list::Filter {
                    keyword: keyword.map(Into::into),
                    kind: kind.map(Into::into),
                    deal: deal.map(Into::into),
                    region: region.map(Into::into),
                    price: price_range.map(Into::into),
                    area: area_range.map(Into::into),
                    status: None,
                },
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|listings| listings.into_iter().map(Into::into).collect())
    }

    /// Returns the publicly viewable `Listing` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LISTING_NOT_FOUND` - no such `Listing`, or it is hidden.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "listing",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn listing(
        id: api::listing::Id,
        ctx: &Context,
    ) -> Result<api::Listing, Error> {
        ctx.service()
            .execute(query::listing::Published(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| ListingError::NotFound.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Listing` with the specified ID, regardless of its
    /// visibility.
    ///
    /// Admin only.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LISTING_NOT_FOUND` - no such `Listing`.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "adminListing",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn admin_listing(
        id: api::listing::Id,
        ctx: &Context,
    ) -> Result<api::Listing, Error> {
        drop(ctx.current_session().await?);

        ctx.service()
            .execute(query::listing::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| ListingError::NotFound.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches the admin inventory of `Listing`s matching the provided
    /// criteria, regardless of their visibility.
    ///
    /// Admin only.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "adminListings",
            keyword = ?keyword.as_ref().map(ToString::to_string),
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn admin_listings(
        keyword: Option<api::listing::Keyword>,
        kind: Option<api::listing::Kind>,
        status: Option<api::listing::Status>,
        ctx: &Context,
    ) -> Result<Vec<api::Listing>, Error> {
        drop(ctx.current_session().await?);

        ctx.service()
            .execute(query::listings::Inventory {
                filter: read::listing::list::Filter {
                    keyword: keyword.map(Into::into),
                    kind: kind.map(Into::into),
                    deal: None,
                    region: None,
                    price: None,
                    area: None,
                    status: status.map(Into::into),
                },
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|listings| listings.into_iter().map(Into::into).collect())
    }

    /// Returns the per-status tally of all `Listing`s.
    ///
    /// Admin only.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "listingStatusCounts",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn listing_status_counts(
        ctx: &Context,
    ) -> Result<api::listing::StatusCounts, Error> {
        drop(ctx.current_session().await?);

        ctx.service()
            .execute(query::listings::StatusCounts)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches all `Consultation`s, newest first.
    ///
    /// Admin only.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "consultations",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn consultations(
        ctx: &Context,
    ) -> Result<Vec<api::Consultation>, Error> {
        drop(ctx.current_session().await?);

        ctx.service()
            .execute(query::consultations::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|stored| stored.into_iter().map(Into::into).collect())
    }

    /// Returns the number of pending `Consultation`s.
    ///
    /// Admin only.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "pendingConsultationCount",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn pending_consultation_count(
        ctx: &Context,
    ) -> Result<i32, Error> {
        drop(ctx.current_session().await?);

        ctx.service()
            .execute(query::consultations::PendingCount)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|count| {
                i32::try_from(usize::from(count)).unwrap_or(i32::MAX)
            })
    }

    /// Fetches all blog `Post`s, newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "posts",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn posts(ctx: &Context) -> Result<Vec<api::Post>, Error> {
        ctx.service()
            .execute(query::posts::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|posts| posts.into_iter().map(Into::into).collect())
    }

    /// Returns the blog `Post` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `POST_NOT_FOUND` - no such `Post`.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "post",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn post(
        id: api::post::Id,
        ctx: &Context,
    ) -> Result<api::Post, Error> {
        ctx.service()
            .execute(query::post::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| PostError::NotFound.into())
            .map_err(ctx.error())
            .map(Into::into)
    }
}

define_error! {
    enum ListingError {
        #[code = "LISTING_NOT_FOUND"]
        #[status = NOT_FOUND]
        #[message = "Listing not found"]
        NotFound,
    }
}

define_error! {
    enum ConsultationError {
        #[code = "CONSULTATION_NOT_FOUND"]
        #[status = NOT_FOUND]
        #[message = "Consultation not found"]
        NotFound,
    }
}

define_error! {
    enum PostError {
        #[code = "POST_NOT_FOUND"]
        #[status = NOT_FOUND]
        #[message = "Post not found"]
        NotFound,
    }
}
