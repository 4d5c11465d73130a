//! Database layer - connection pool and repository
//!
//! # Design Principles
//!
//! - Handlers never hold a connection across requests: each operation
//!   acquires one from the pool and the guard returns it on every exit path
//! - One SQL statement per operation, relying on single-statement atomicity
//! - Not-found is detected from the statement result (affected-row count or
//!   empty lookup), never via a separate existence check

pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
