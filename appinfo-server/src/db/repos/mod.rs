//! Repository implementations for database access
//!
//! Repositories borrow the pool per request; nothing holds a
//! connection across requests.

pub mod apps;

pub use apps::{AppInfo, AppRepo, DbError, NewApp};
