//! Toast notification component.

use leptos::prelude::*;
use tracing::trace;

/// Corner toast gated on a caller-owned `open` flag.
///
/// Renders nothing while closed; while open shows `message` verbatim.
#[component]
pub fn Toast(
    /// Whether the toast is visible.
    open: bool,
    /// Message text.
    #[prop(into)]
    message: String,
) -> impl IntoView {
    trace!(open, "rendering toast");

    open.then(|| {
        view! {
            <div class="fixed bottom-6 right-6 bg-[var(--surface)] border border-[var(--border)] shadow-lg px-4 py-2 rounded-md">
                {message}
            </div>
        }
    })
}
