//! Error Message Component
//!
//! Banner for storage-level errors.

use leptos::prelude::*;
use todo_core::ErrorSeverity;

/// Alert banner, styled by severity
#[component]
pub fn ErrorMessage(
    #[prop(into)] message: String,
    severity: ErrorSeverity,
) -> impl IntoView {
    view! {
        <div class=banner_class(severity) role="alert" aria-live="assertive">
            {message}
        </div>
    }
}

fn banner_class(severity: ErrorSeverity) -> &'static str {
    match severity {
        ErrorSeverity::Critical => "error-message critical",
        ErrorSeverity::Warning | ErrorSeverity::Validation => "error-message warning",
    }
}
