//! Domain entities definitions.

pub mod consultation;
pub mod listing;
pub mod phone;
pub mod post;
pub mod session;

pub use self::{
    consultation::Consultation, listing::Listing, phone::Phone, post::Post,
    session::Session,
};
