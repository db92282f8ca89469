//! Todo Item Component
//!
//! A single row in the todo list.

use leptos::prelude::*;
use todo_core::{Todo, TodoId};

/// Checkbox, task text and delete button for one todo
#[component]
pub fn TodoItem(
    todo: Todo,
    on_toggle: Callback<TodoId>,
    on_delete: Callback<TodoId>,
) -> impl IntoView {
    let id = todo.id;
    let completed = todo.completed;
    let text_class = if completed { "completed" } else { "" };
    let toggle_label = format!("Toggle {}", todo.task);
    let delete_label = format!("Delete {}", todo.task);

    view! {
        <div class="todo-item">
            <input
                type="checkbox"
                prop:checked=completed
                aria-label=toggle_label
                on:change=move |_| on_toggle.run(id)
            />
            <span class=text_class>{todo.task}</span>
            <button
                class="delete-button"
                aria-label=delete_label
                on:click=move |_| on_delete.run(id)
            >
                "Delete"
            </button>
        </div>
    }
}
