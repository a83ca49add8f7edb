//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Wire names are camelCase (`userId`), matching the public mock todo API.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
///
/// Equality is field-by-field, which is what the update form's dirty-check
/// relies on: two items decoded from JSON objects with the same values but a
/// different key order compare equal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a new todo. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub user_id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Overwrite the editable fields with those of `other`, keeping `self.id`.
    pub fn patch_from(&mut self, other: &TodoItem) {
        self.user_id = other.user_id;
        self.title.clone_from(&other.title);
        self.completed = other.completed;
    }
}
