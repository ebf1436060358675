//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) owned by AppState - no globals
//! - Rely on DB constraints, map unique violations - no check-then-insert
//! - Single-statement operations only; no cross-statement transactions

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
