//! Service layer holding the user records.
//! - `users::UserStore` is the only way callers reach the data.
//! - `users::InMemoryUserStore` is seeded on construction and lives as long as the process.

pub mod errors;
pub mod users;
