// src/entity/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, Client};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub category: Option<Category>,
    pub client: Option<Client>,
}

impl Note {
    /// Build a note with a fresh id (milliseconds since the Unix epoch).
    pub fn new(
        title: String,
        message: String,
        category: Option<Category>,
        client: Option<Client>,
    ) -> Self {
        Self {
            id: Utc::now().timestamp_millis(),
            title,
            message,
            category,
            client,
        }
    }

    /// Creation time recovered from the id.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.id)
    }
}
