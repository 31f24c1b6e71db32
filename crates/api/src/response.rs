//! Small response bodies shared by handlers.
//!
//! Entities are returned bare (`Json<Dictionary>`, `Json<Vec<Character>>`);
//! these cover the acknowledgement shapes the browser client expects.

use epicdict_core::types::DbId;
use serde::Serialize;

/// `{ "message": "..." }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// `{ "id": ... }` returned when a resource is created.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
}
