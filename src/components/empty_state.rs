//! Empty State Component

use leptos::prelude::*;

/// Shown instead of the list when there are no todos
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>"No tasks available"</p>
        </div>
    }
}
