//! Tab strip component.

use leptos::prelude::*;

/// Horizontal tab strip.
///
/// The tab equal to `active` is highlighted; the selection itself is owned by
/// the caller and fed back in on every render. Clicking a tab runs
/// `on_change` with that tab's literal value.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Tabs
///         tabs=vec!["General".to_string(), "Billing".to_string()]
///         active="General"
///         on_change=Callback::new(move |tab| set_active.set(tab))
///     />
/// }
/// ```
#[component]
pub fn Tabs(
    /// Ordered tab labels.
    #[prop(optional)]
    tabs: Vec<String>,
    /// Currently selected tab value.
    #[prop(into)]
    active: String,
    /// Called with the clicked tab's value.
    #[prop(optional, into)]
    on_change: Option<Callback<String>>,
) -> impl IntoView {
    let entries = tabs
        .into_iter()
        .map(|tab| {
            let classes = if tab == active {
                "px-4 py-2 border-b-2 border-[var(--primary)] text-[var(--primary)]"
            } else {
                "px-4 py-2 text-[var(--text-secondary)]"
            };
            let value = tab.clone();

            view! {
                <button
                    type="button"
                    class=classes
                    on:click=move |_| {
                        if let Some(cb) = on_change {
                            cb.run(value.clone());
                        }
                    }
                >
                    {tab}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="flex border-b border-[var(--border)]">{entries}</div>
    }
}
