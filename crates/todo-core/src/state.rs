//! Todo State
//!
//! Owns the ordered todo list and the error slot. Every mutation that changes
//! the list is written through to the store immediately, unless storage was
//! found unavailable at initialization.

use crate::config::TodoConfig;
use crate::error::TodoError;
use crate::models::{Todo, TodoAction, TodoId};
use crate::storage::{KeyValueStore, Persistence};
use crate::validation::validate_task_with_limit;

/// Monotonic ID generator owned by a single `TodoState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSequence {
    /// `None` once `TodoId::MAX` has been handed out
    next: Option<TodoId>,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start one past the largest existing ID (1 for an empty list)
    pub fn after(todos: &[Todo]) -> Self {
        let next = match todos.iter().map(|t| t.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { next }
    }

    /// ID the next call to `allocate` will return
    pub fn peek(&self) -> Option<TodoId> {
        self.next
    }

    /// Hand out the next ID, `None` when the ID space is used up
    pub fn allocate(&mut self) -> Option<TodoId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }
}

/// The todo list container
#[derive(Debug)]
pub struct TodoState<S> {
    todos: Vec<Todo>,
    error: Option<TodoError>,
    ids: IdSequence,
    /// `None` once storage was found unavailable
    persistence: Option<Persistence<S>>,
    config: TodoConfig,
}

impl<S: KeyValueStore> TodoState<S> {
    /// Probe the store and load the persisted list.
    ///
    /// An unavailable store disables persistence for the lifetime of the state.
    /// A corrupted entry is replaced by an empty list.
    pub fn initialize(store: S, config: TodoConfig) -> Self {
        let mut persistence = Persistence::new(store);

        if !persistence.is_available() {
            log::error!("[STATE] Storage unavailable, changes will not be saved");
            return Self {
                todos: Vec::new(),
                error: Some(TodoError::StorageUnavailable),
                ids: IdSequence::new(),
                persistence: None,
                config,
            };
        }

        let (todos, error) = match persistence.try_load::<Vec<Todo>>(&config.storage_key) {
            Ok(Some(todos)) => {
                log::info!("[STATE] Loaded {} todos", todos.len());
                (todos, None)
            }
            Ok(None) => (Vec::new(), None),
            Err(e) => {
                log::error!("[STATE] Failed to load todos: {}", e);
                if let Err(e) = persistence.save(&config.storage_key, &Vec::<Todo>::new()) {
                    log::warn!("[STATE] Failed to reset corrupted storage: {}", e);
                }
                (Vec::new(), Some(TodoError::LoadFailed))
            }
        };

        Self {
            ids: IdSequence::after(&todos),
            todos,
            error,
            persistence: Some(persistence),
            config,
        }
    }

    /// Todos in insertion order
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn error(&self) -> Option<&TodoError> {
        self.error.as_ref()
    }

    pub fn is_storage_available(&self) -> bool {
        self.persistence.is_some()
    }

    /// ID the next accepted add will receive
    pub fn next_id(&self) -> Option<TodoId> {
        self.ids.peek()
    }

    /// Underlying store, `None` when storage is unavailable
    pub fn store(&self) -> Option<&S> {
        self.persistence.as_ref().map(Persistence::store)
    }

    pub fn store_mut(&mut self) -> Option<&mut S> {
        self.persistence.as_mut().map(Persistence::store_mut)
    }

    /// Validate and append a new todo.
    ///
    /// Returns the new ID when the text was accepted, even if saving failed.
    pub fn add_todo(&mut self, text: &str) -> Option<TodoId> {
        if let Err(e) = validate_task_with_limit(text, self.config.max_task_chars) {
            log::debug!("[STATE] Rejected task: {}", e);
            self.error = Some(e.into());
            return None;
        }

        let Some(id) = self.ids.allocate() else {
            log::error!("[STATE] Todo IDs exhausted");
            self.error = Some(TodoError::IdsExhausted);
            return None;
        };
        self.error = None;
        self.todos.push(Todo::new(id, text));
        log::debug!("[STATE] Added todo {}", id);
        self.persist();
        Some(id)
    }

    /// Remove the todo with `id`. Returns false if there was none.
    pub fn delete_todo(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        if self.todos.len() == before {
            return false;
        }
        log::debug!("[STATE] Deleted todo {}", id);
        self.persist();
        true
    }

    /// Flip completion of the todo with `id`. Returns false if there was none.
    pub fn toggle_todo(&mut self, id: TodoId) -> bool {
        let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) else {
            return false;
        };
        todo.completed = !todo.completed;
        log::debug!("[STATE] Toggled todo {} -> {}", id, todo.completed);
        self.persist();
        true
    }

    /// Apply an action; returns whether it changed the list
    pub fn dispatch(&mut self, action: TodoAction) -> bool {
        match action {
            TodoAction::Add { text } => self.add_todo(&text).is_some(),
            TodoAction::Delete { id } => self.delete_todo(id),
            TodoAction::Toggle { id } => self.toggle_todo(id),
        }
    }

    /// Write the full list through to storage. A failure only sets the error
    /// slot; the in-memory list is kept as is.
    fn persist(&mut self) {
        let Some(persistence) = self.persistence.as_mut() else {
            return;
        };
        if let Err(e) = persistence.save(&self.config.storage_key, &self.todos) {
            log::warn!("[STATE] Failed to save todos: {}", e);
            self.error = Some(e.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_sequence_starts_at_one() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.allocate(), Some(1));
        assert_eq!(ids.allocate(), Some(2));
    }

    #[test]
    fn test_id_sequence_stops_at_max() {
        let todos = vec![Todo::new(TodoId::MAX - 1, "almost full")];
        let mut ids = IdSequence::after(&todos);
        assert_eq!(ids.allocate(), Some(TodoId::MAX));
        assert_eq!(ids.allocate(), None);
        assert_eq!(ids.allocate(), None);
    }

    #[test]
    fn test_id_sequence_after_loaded_list() {
        let todos = vec![Todo::new(4, "a"), Todo::new(9, "b"), Todo::new(2, "c")];
        assert_eq!(IdSequence::after(&todos).peek(), Some(10));
        assert_eq!(IdSequence::after(&[]).peek(), Some(1));
        assert_eq!(IdSequence::after(&[Todo::new(TodoId::MAX, "last")]).peek(), None);
    }
}
