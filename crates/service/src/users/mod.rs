//! User records: domain types, the storage trait, and the in-memory store.

pub mod domain;
pub mod memory;
pub mod repository;

pub use domain::{User, UserWriteModel, DEFAULT_EMOJI, DEFAULT_NAME};
pub use memory::InMemoryUserStore;
pub use repository::UserStore;
