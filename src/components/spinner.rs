//! Loading spinner component.

use leptos::prelude::*;

/// Centered loading spinner.
#[component]
pub fn Spinner(
    /// Additional CSS classes for the outer container.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("flex items-center justify-center {}", class);

    view! {
        <div class=classes>
            <div class="h-6 w-6 animate-spin rounded-full border-2 border-[var(--primary)] border-t-transparent"></div>
        </div>
    }
}
