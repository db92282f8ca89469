//! Todo App Frontend App
//!
//! Root component: provides the todo context and lays out the page.

use leptos::prelude::*;
use todo_core::{TodoConfig, TodoError, TodoId};

use crate::components::{ErrorMessage, TodoInput, TodoList};
use crate::context::{provide_todo_context, use_todos};

#[component]
pub fn App() -> impl IntoView {
    provide_todo_context(TodoConfig::default());

    view! { <TodoApp /> }
}

/// Input, list and storage banner wired to the todo context
#[component]
pub fn TodoApp() -> impl IntoView {
    let ctx = use_todos();
    let todos = ctx.todos();
    let error = ctx.error();
    let storage_available = ctx.storage_available();

    // Storage errors get a banner, validation errors stay next to the input
    let banner = move || {
        error
            .get()
            .filter(TodoError::is_storage_error)
            .map(|e| view! { <ErrorMessage message=e.to_string() severity=e.severity() /> })
    };
    let input_error = Signal::derive(move || {
        error
            .get()
            .filter(|e| !e.is_storage_error())
            .map(|e| e.to_string())
    });
    let input_disabled = Signal::derive(move || !storage_available.get());

    let on_add = Callback::new(move |text: String| ctx.add_todo(text));
    let on_toggle = Callback::new(move |id: TodoId| ctx.toggle_todo(id));
    let on_delete = Callback::new(move |id: TodoId| ctx.delete_todo(id));

    view! {
        <div class="todo-app">
            <h1>"Todo List"</h1>

            {banner}

            <TodoInput on_add=on_add error=input_error disabled=input_disabled />

            <TodoList todos=todos on_toggle=on_toggle on_delete=on_delete />
        </div>
    }
}
