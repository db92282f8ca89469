//! Todo Input Component
//!
//! Text box and Add button for new tasks.

use leptos::prelude::*;

/// Input for new todos.
///
/// Submits on Enter or the Add button. The text is cleared only when
/// `on_add` reports the task was accepted, so a rejected task stays editable.
///
/// # Arguments
/// * `on_add` - Adds the task, returns whether it was accepted
/// * `error` - Inline validation message
/// * `disabled` - Blocks input, e.g. when storage is unavailable
#[component]
pub fn TodoInput(
    #[prop(into)] on_add: Callback<String, bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());

    let submit = move || {
        if disabled.get_untracked() {
            return;
        }
        if on_add.run(input_value.get_untracked()) {
            set_input_value.set(String::new());
        }
    };

    view! {
        <div class="todo-input-container">
            <div class="input-row">
                <input
                    type="text"
                    class="todo-input"
                    placeholder="Add a new task..."
                    aria-label="New task input"
                    aria-invalid=move || if error.with(Option::is_some) { "true" } else { "false" }
                    aria-describedby=move || error.with(Option::is_some).then_some("error-message")
                    disabled=move || disabled.get()
                    prop:value=move || input_value.get()
                    on:input=move |ev| set_input_value.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button
                    class="add-button"
                    aria-label="Add"
                    disabled=move || disabled.get()
                    on:click=move |_| submit()
                >
                    "Add"
                </button>
            </div>
            {move || error.get().map(|msg| view! {
                <div id="error-message" class="error">{msg}</div>
            })}
        </div>
    }
}
