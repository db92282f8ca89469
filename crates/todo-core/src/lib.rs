//! Todo Core
//!
//! Layered logic behind the todo frontend:
//! - models: Todo entity and actions
//! - validation: task text rules
//! - storage: key/value capability and JSON persistence adapter
//! - state: the todo list container with write-through persistence

mod config;
mod error;
mod models;
mod state;
mod storage;
mod validation;


pub use config::{TodoConfig, DEFAULT_STORAGE_KEY};
pub use error::{ErrorSeverity, TodoError};
pub use models::{Todo, TodoAction, TodoId};
pub use state::{IdSequence, TodoState};
pub use storage::{KeyValueStore, LoadError, MemoryStore, Persistence, SaveError, StoreError};
pub use validation::{validate_task, validate_task_with_limit, ValidationError, MAX_TASK_CHARS};
