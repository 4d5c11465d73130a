//! Domain models

pub mod workroom;

pub use workroom::{Workroom, WorkroomPayload};
