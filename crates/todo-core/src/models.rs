//! Todo Entity
//!
//! A single task in the list, plus the actions that can be applied to the list.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the owning container's `IdSequence`
pub type TodoId = u64;

/// A todo item as held in memory and persisted to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique within the lifetime of the owning container
    pub id: TodoId,
    /// Task text exactly as entered
    pub task: String,
    /// Completion status
    pub completed: bool,
}

impl Todo {
    /// Create a new, not yet completed todo
    pub fn new(id: TodoId, task: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
            completed: false,
        }
    }
}

/// Mutations that can be dispatched against a `TodoState`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    Add { text: String },
    Delete { id: TodoId },
    Toggle { id: TodoId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new(1, "Buy milk");
        assert_eq!(todo.id, 1);
        assert_eq!(todo.task, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn test_todo_json_layout() {
        let todo = Todo::new(7, "Write report");
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":7,"task":"Write report","completed":false}"#);
    }

    #[test]
    fn test_todo_rejects_missing_fields() {
        let parsed = serde_json::from_str::<Todo>(r#"{"id":1,"task":"x"}"#);
        assert!(parsed.is_err());
    }
}
