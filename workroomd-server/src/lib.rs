//! workroomd-server: HTTP record service for workrooms
//!
//! Exposes CRUD operations over workroom records stored in a single
//! PostgreSQL table. The HTTP layer maps requests onto a repository
//! that issues one SQL statement per operation.

pub mod db;
pub mod http;
pub mod models;
