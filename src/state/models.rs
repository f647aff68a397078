/// Data models for the user state document
///
/// Field names match the on-disk JSON so older documents keep loading.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema version written by this build
pub const CURRENT_VERSION: u32 = 1;

/// Root aggregate: everything the assistant remembers about the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    /// Missing in legacy documents, which read as version 0
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
    #[serde(default)]
    pub todo_list: Vec<TodoItem>,
    /// Reserved; no skill reads it yet
    #[serde(default)]
    pub preferences: BTreeMap<String, serde_json::Value>,
}

impl Default for UserState {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            notes: Vec::new(),
            reminders: Vec::new(),
            todo_list: Vec::new(),
            preferences: BTreeMap::new(),
        }
    }
}

/// A saved note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub content: String,
    #[serde(rename = "timestamp")]
    pub created_at: NaiveDateTime, // naive local time, ISO 8601
}

/// A stored reminder. Storage only, nothing ever fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: u64,
    pub message: String,
    #[serde(rename = "created")]
    pub created_at: NaiveDateTime,
}

/// One todo entry. Its position is its index + 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub task: String,
    #[serde(default)]
    pub done: bool,
}

impl TodoItem {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            done: false,
        }
    }

    /// Marker shown in front of the item when the list is rendered
    pub fn marker(&self) -> &'static str {
        if self.done {
            "✓"
        } else {
            "○"
        }
    }
}
