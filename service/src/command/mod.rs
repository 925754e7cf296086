//! [`Command`] definition.

pub mod authorize_admin_session;
pub mod create_admin_session;
pub mod create_listing;
pub mod create_post;
pub mod delete_consultation;
pub mod delete_listing;
pub mod delete_post;
pub mod mark_listing_sold;
pub mod restore_listing;
pub mod set_listing_memo;
pub mod submit_consultation;
pub mod toggle_consultation_status;
pub mod toggle_listing_visibility;
pub mod update_listing;
pub mod update_post;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    authorize_admin_session::AuthorizeAdminSession,
    create_admin_session::CreateAdminSession, create_listing::CreateListing,
    create_post::CreatePost, delete_consultation::DeleteConsultation,
    delete_listing::DeleteListing, delete_post::DeletePost,
    mark_listing_sold::MarkListingSold, restore_listing::RestoreListing,
    set_listing_memo::SetListingMemo,
    submit_consultation::SubmitConsultation,
    toggle_consultation_status::ToggleConsultationStatus,
    toggle_listing_visibility::ToggleListingVisibility,
    update_listing::UpdateListing, update_post::UpdatePost,
};
