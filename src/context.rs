//! Application Context
//!
//! The todo container and its reactive mirror, provided via the Context API.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Todo, TodoConfig, TodoError, TodoId, TodoState};

use crate::local_storage::BrowserStorage;
use crate::store::{self, AppState, AppStore};

/// Todo operations and state signals for the view layer
#[derive(Clone, Copy)]
pub struct TodoContext {
    store: AppStore,
    /// `web_sys::Storage` is not `Send`, so the container stays on this thread
    state: StoredValue<TodoState<BrowserStorage>, LocalStorage>,
}

impl TodoContext {
    /// Initialize the container from browser storage
    pub fn new(config: TodoConfig) -> Self {
        let state = TodoState::initialize(BrowserStorage::default(), config);
        log::info!(
            "[APP] Todo state ready: {} todos, storage available = {}",
            state.todos().len(),
            state.is_storage_available()
        );
        let store = Store::new(AppState::from_todo_state(&state));
        Self {
            store,
            state: StoredValue::new_local(state),
        }
    }

    pub fn todos(&self) -> Signal<Vec<Todo>> {
        store::store_todos(self.store)
    }

    pub fn error(&self) -> Signal<Option<TodoError>> {
        store::store_error(self.store)
    }

    pub fn storage_available(&self) -> Signal<bool> {
        store::store_storage_available(self.store)
    }

    /// Returns true when the text was accepted
    pub fn add_todo(&self, text: String) -> bool {
        let added = self.state.try_update_value(|state| state.add_todo(&text)).flatten();
        self.sync();
        added.is_some()
    }

    pub fn delete_todo(&self, id: TodoId) {
        self.state.update_value(|state| {
            state.delete_todo(id);
        });
        self.sync();
    }

    pub fn toggle_todo(&self, id: TodoId) {
        self.state.update_value(|state| {
            state.toggle_todo(id);
        });
        self.sync();
    }

    /// Push the container's current state into the reactive store
    fn sync(&self) {
        if let Some(snapshot) = self.state.try_with_value(AppState::from_todo_state) {
            store::store_apply(&self.store, snapshot);
        }
    }
}

/// Create the todo context and provide it to all children
pub fn provide_todo_context(config: TodoConfig) -> TodoContext {
    let ctx = TodoContext::new(config);
    provide_context(ctx);
    ctx
}

/// Get the todo context
pub fn use_todos() -> TodoContext {
    expect_context::<TodoContext>()
}
