//! Modal dialog component.

use leptos::prelude::*;
use tracing::trace;

/// Modal dialog gated on a caller-owned `open` flag.
///
/// Renders nothing at all while closed. The dismissal button only runs
/// `on_close`; flipping `open` back is the caller's job. The modal never
/// closes itself.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Modal open=show.get() on_close=Callback::new(move |()| set_show.set(false))>
///         <p>"Are you sure?"</p>
///     </Modal>
/// }
/// ```
#[component]
pub fn Modal(
    /// Whether the modal is visible.
    open: bool,
    /// Called when the dismissal button is activated.
    #[prop(optional, into)]
    on_close: Option<Callback<()>>,
    /// Modal body content.
    children: Children,
) -> impl IntoView {
    trace!(open, "rendering modal");

    open.then(|| {
        view! {
            <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-[var(--z-modal)]">
                <div class="bg-[var(--surface)] p-6 rounded-lg shadow-xl w-full max-w-lg">
                    {children()}
                    <button
                        type="button"
                        class="mt-4 px-4 py-2 bg-[var(--error)] text-white rounded-md"
                        on:click=move |_| {
                            if let Some(cb) = on_close {
                                cb.run(());
                            }
                        }
                    >
                        "Close"
                    </button>
                </div>
            </div>
        }
    })
}
