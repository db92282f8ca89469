//! Todo List Component

use leptos::prelude::*;
use todo_core::{Todo, TodoId};

use crate::components::{EmptyState, TodoItem};

/// All todos in order, or the empty state
#[component]
pub fn TodoList(
    #[prop(into)] todos: Signal<Vec<Todo>>,
    on_toggle: Callback<TodoId>,
    on_delete: Callback<TodoId>,
) -> impl IntoView {
    move || {
        if todos.with(Vec::is_empty) {
            view! { <EmptyState /> }.into_any()
        } else {
            view! {
                <div class="todo-list">
                    <For
                        each=move || todos.get()
                        // completed is part of the key so a toggle re-renders the row
                        key=|todo| (todo.id, todo.completed)
                        children=move |todo| view! {
                            <TodoItem todo=todo on_toggle=on_toggle on_delete=on_delete />
                        }
                    />
                </div>
            }
            .into_any()
        }
    }
}
