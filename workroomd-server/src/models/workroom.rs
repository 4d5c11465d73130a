//! Workroom record and request payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A workroom record as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Workroom {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub project_lead: String,
}

/// Incoming workroom body for create/update.
///
/// Clients may send an `id` field; it is never trusted. Create assigns a
/// fresh id from the store, update takes the id from the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkroomPayload {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub project_lead: String,
}

impl WorkroomPayload {
    /// Attach a store-assigned (or path-supplied) id to the payload fields.
    pub fn into_workroom(self, id: i32) -> Workroom {
        Workroom {
            id,
            name: self.name,
            description: self.description,
            capacity: self.capacity,
            project_lead: self.project_lead,
        }
    }
}
