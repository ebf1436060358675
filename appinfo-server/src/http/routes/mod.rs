//! Route handlers organized by resource

pub mod apps;
pub mod health;
