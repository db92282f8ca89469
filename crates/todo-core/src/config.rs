//! Core Configuration

use serde::{Deserialize, Serialize};

use crate::validation::MAX_TASK_CHARS;

/// Storage key under which the todo list is persisted
pub const DEFAULT_STORAGE_KEY: &str = "react-todo-app-tasks";

/// Settings for a `TodoState`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Key of the single persisted entry
    pub storage_key: String,
    /// Maximum raw task length, in UTF-16 code units
    pub max_task_chars: usize,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_task_chars: MAX_TASK_CHARS,
        }
    }
}
