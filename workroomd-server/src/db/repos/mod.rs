//! Repository implementations for database access

pub mod workrooms;

pub use workrooms::{DbError, WorkroomRepo};
