//! Postgres access layer
//!
//! Pool construction, startup migrations, and per-entity repositories.

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
