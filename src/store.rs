//! Application State Store
//!
//! Reactive mirror of the todo container, using reactive_stores for
//! field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{KeyValueStore, Todo, TodoError, TodoState};

/// What the view layer renders
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos in display order
    pub todos: Vec<Todo>,
    /// Active error, validation or storage
    pub error: Option<TodoError>,
    /// False once storage was found unavailable
    pub storage_available: bool,
}

impl AppState {
    /// Snapshot a todo container
    pub fn from_todo_state<S: KeyValueStore>(state: &TodoState<S>) -> Self {
        Self {
            todos: state.todos().to_vec(),
            error: state.error().cloned(),
            storage_available: state.is_storage_available(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Replace every field of the store with `snapshot`
pub fn store_apply(store: &AppStore, snapshot: AppState) {
    *store.todos().write() = snapshot.todos;
    *store.error().write() = snapshot.error;
    *store.storage_available().write() = snapshot.storage_available;
}

pub fn store_todos(store: AppStore) -> Signal<Vec<Todo>> {
    Signal::derive(move || store.todos().get())
}

pub fn store_error(store: AppStore) -> Signal<Option<TodoError>> {
    Signal::derive(move || store.error().get())
}

pub fn store_storage_available(store: AppStore) -> Signal<bool> {
    Signal::derive(move || store.storage_available().get())
}
