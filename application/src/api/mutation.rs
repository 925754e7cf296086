//! GraphQL [`Mutation`]s definitions.

use common::DateTime;
use juniper::{graphql_object, GraphQLObject};
use secrecy::SecretString;
use service::{command, Command as _};

use crate::{api, define_error, AsError, Context, Error};

use super::query::{ConsultationError, ListingError, PostError};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Creates a new admin session out of the shared password.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `WRONG_PASSWORD` - the provided password does not match.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createAdminSession",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_admin_session(
        password: String,
        ctx: &Context,
    ) -> Result<AdminSession, Error> {
        ctx.service()
            .execute(command::CreateAdminSession {
                password: SecretString::from(password),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|output| AdminSession {
                token: output.token.to_string(),
                expires_at: output.expires_at.coerce(),
            })
    }

    /// Registers a new `Listing`.
    ///
    /// Admin only.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createListing",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_listing(
        input: api::listing::Input,
        ctx: &Context,
    ) -> Result<api::Listing, Error> {
        drop(ctx.current_session().await?);

        let cmd =
            command::CreateListing::try_from(input).map_err(ctx.error())?;
        ctx.service()
            .execute(cmd)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Edits an existing `Listing`.
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
            gql.name = "updateListing",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_listing(
        id: api::listing::Id,
        input: api::listing::Input,
        ctx: &Context,
    ) -> Result<api::Listing, Error> {
        drop(ctx.current_session().await?);

        let command::CreateListing {
            title,
            kind,
            deal,
            price,
            monthly_rent,
            area,
            building_area,
            total_floor_area,
            ground_floors,
            underground_floors,
            structure,
            use_approval_date,
            address,
            region,
            land_category,
            zoning,
            road_frontage,
            shape,
            terrain,
            illegal_building,
            description,
            article,
            images,
            video_url,
            disclosure,
        } = command::CreateListing::try_from(input).map_err(ctx.error())?;

        ctx.service()
            .execute(command::UpdateListing {
                id: id.into(),
                title,
                kind,
                deal,
                price,
                monthly_rent,
                area,
                building_area,
                total_floor_area,
                ground_floors,
                underground_floors,
                structure,
                use_approval_date,
                address,
                region,
                land_category,
                zoning,
                road_frontage,
                shape,
                terrain,
                illegal_building,
                description,
                article,
                images,
                video_url,
                disclosure,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Toggles a `Listing` between visible and hidden.
    ///
    /// Admin only.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LISTING_NOT_FOUND` - no such `Listing`;
    /// - `LISTING_SOLD` - the `Listing` is sold and requires an explicit
    ///   restore.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "toggleListingVisibility",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn toggle_listing_visibility(
        id: api::listing::Id,
        ctx: &Context,
    ) -> Result<api::Listing, Error> {
        drop(ctx.current_session().await?);

        ctx.service()
            .execute(command::ToggleListingVisibility { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Marks a `Listing` as sold.
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
            gql.name = "markListingSold",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn mark_listing_sold(
        id: api::listing::Id,
        ctx: &Context,
    ) -> Result<api::Listing, Error> {
        drop(ctx.current_session().await?);

        ctx.service()
            .execute(command::MarkListingSold { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Restores a sold `Listing` back to the catalog.
    ///
    /// Admin only.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LISTING_NOT_FOUND` - no such `Listing`;
    /// - `LISTING_NOT_SOLD` - the `Listing` is not sold.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "restoreListing",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn restore_listing(
        id: api::listing::Id,
        ctx: &Context,
    ) -> Result<api::Listing, Error> {
        drop(ctx.current_session().await?);

        ctx.service()
            .execute(command::RestoreListing { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Edits the admin-private memo and owner contact of a `Listing`.
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
            gql.name = "setListingMemo",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn set_listing_memo(
        id: api::listing::Id,
        memo: Option<api::listing::Memo>,
        owner_phone: Option<api::scalar::Phone>,
        ctx: &Context,
    ) -> Result<api::Listing, Error> {
        drop(ctx.current_session().await?);

        ctx.service()
            .execute(command::SetListingMemo {
                id: id.into(),
                memo: memo.map(Into::into),
                owner_phone: owner_phone.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Permanently deletes a `Listing`.
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
            gql.name = "deleteListing",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_listing(
        id: api::listing::Id,
        ctx: &Context,
    ) -> Result<bool, Error> {
        drop(ctx.current_session().await?);

        ctx.service()
            .execute(command::DeleteListing { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|()| true)
    }

    /// Submits a new `Consultation` about a `Listing`.
    ///
    /// Public: anyone may submit. The brokerage is notified out of band;
    /// a failed notification never fails the submission.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LISTING_NOT_FOUND` - no such `Listing`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "submitConsultation",
            listing_id = %listing_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn submit_consultation(
        listing_id: api::listing::Id,
        customer_name: api::consultation::CustomerName,
        customer_phone: api::scalar::Phone,
        message: Option<api::consultation::Message>,
        ctx: &Context,
    ) -> Result<api::Consultation, Error> {
        ctx.service()
            .execute(command::SubmitConsultation {
                listing_id: listing_id.into(),
                customer_name: customer_name.into(),
                customer_phone: customer_phone.into(),
                message: message.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Toggles a `Consultation` between pending and completed.
    ///
    /// Admin only.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `CONSULTATION_NOT_FOUND` - no such `Consultation`.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "toggleConsultationStatus",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn toggle_consultation_status(
        id: api::consultation::Id,
        ctx: &Context,
    ) -> Result<api::Consultation, Error> {
        drop(ctx.current_session().await?);

        ctx.service()
            .execute(command::ToggleConsultationStatus { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Permanently deletes a `Consultation`.
    ///
    /// Admin only.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `CONSULTATION_NOT_FOUND` - no such `Consultation`.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "deleteConsultation",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_consultation(
        id: api::consultation::Id,
        ctx: &Context,
    ) -> Result<bool, Error> {
        drop(ctx.current_session().await?);

        ctx.service()
            .execute(command::DeleteConsultation { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|()| true)
    }

    /// Publishes a new blog `Post`.
    ///
    /// Admin only.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createPost",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_post(
        title: api::post::Title,
        content: api::post::Content,
        excerpt: Option<api::post::Excerpt>,
        ctx: &Context,
    ) -> Result<api::Post, Error> {
        drop(ctx.current_session().await?);

        ctx.service()
            .execute(command::CreatePost {
                title: title.into(),
                content: content.into(),
                excerpt: excerpt.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Edits an existing blog `Post`.
    ///
    /// Admin only.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `POST_NOT_FOUND` - no such `Post`.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "updatePost",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_post(
        id: api::post::Id,
        title: api::post::Title,
        content: api::post::Content,
        excerpt: Option<api::post::Excerpt>,
        ctx: &Context,
    ) -> Result<api::Post, Error> {
        drop(ctx.current_session().await?);

        ctx.service()
            .execute(command::UpdatePost {
                id: id.into(),
                title: title.into(),
                content: content.into(),
                excerpt: excerpt.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Permanently deletes a blog `Post`.
    ///
    /// Admin only.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `POST_NOT_FOUND` - no such `Post`.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "deletePost",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_post(
        id: api::post::Id,
        ctx: &Context,
    ) -> Result<bool, Error> {
        drop(ctx.current_session().await?);

        ctx.service()
            .execute(command::DeletePost { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|()| true)
    }
}

/// Created admin session.
#[derive(Clone, Debug, GraphQLObject)]
pub struct AdminSession {
    /// Bearer token authorizing subsequent admin requests.
    pub token: String,

    /// `DateTime` when the session expires.
    pub expires_at: DateTime,
}

define_error! {
    enum PasswordError {
        #[code = "WRONG_PASSWORD"]
        #[status = UNAUTHORIZED]
        #[message = "Wrong admin password"]
        Wrong,
    }
}

define_error! {
    enum ModerationError {
        #[code = "LISTING_SOLD"]
        #[status = CONFLICT]
        #[message = "Listing is sold; restore it explicitly"]
        Sold,

        #[code = "LISTING_NOT_SOLD"]
        #[status = CONFLICT]
        #[message = "Listing is not sold"]
        NotSold,
    }
}

impl AsError for command::create_admin_session::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::WrongPassword => Some(PasswordError::Wrong.into()),
            Self::JsonWebTokenEncodeError(_) => None,
        }
    }
}

impl AsError for command::create_listing::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
        }
    }
}

impl AsError for command::update_listing::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ListingNotExists(_) => Some(ListingError::NotFound.into()),
        }
    }
}

impl AsError for command::toggle_listing_visibility::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ListingNotExists(_) => Some(ListingError::NotFound.into()),
            Self::ListingSold(_) => Some(ModerationError::Sold.into()),
        }
    }
}

impl AsError for command::mark_listing_sold::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ListingNotExists(_) => Some(ListingError::NotFound.into()),
        }
    }
}

impl AsError for command::restore_listing::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ListingNotExists(_) => Some(ListingError::NotFound.into()),
            Self::ListingNotSold(_) => Some(ModerationError::NotSold.into()),
        }
    }
}

impl AsError for command::set_listing_memo::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ListingNotExists(_) => Some(ListingError::NotFound.into()),
        }
    }
}

impl AsError for command::delete_listing::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ListingNotExists(_) => Some(ListingError::NotFound.into()),
        }
    }
}

impl AsError for command::submit_consultation::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ListingNotExists(_) => Some(ListingError::NotFound.into()),
        }
    }
}

impl AsError for command::toggle_consultation_status::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::ConsultationNotExists(_) => {
                Some(ConsultationError::NotFound.into())
            }
            Self::Db(e) => e.try_as_error(),
        }
    }
}

impl AsError for command::delete_consultation::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::ConsultationNotExists(_) => {
                Some(ConsultationError::NotFound.into())
            }
            Self::Db(e) => e.try_as_error(),
        }
    }
}

impl AsError for command::create_post::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
        }
    }
}

impl AsError for command::update_post::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::PostNotExists(_) => Some(PostError::NotFound.into()),
        }
    }
}

impl AsError for command::delete_post::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::PostNotExists(_) => Some(PostError::NotFound.into()),
        }
    }
}
