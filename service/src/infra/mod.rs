//! Infrastructure layer.

pub mod notify;
pub mod storage;

pub use self::{
    notify::{Notifier, Telegram},
    storage::{JsonFile, Storage},
};
