//! Dropdown menu component.

use leptos::prelude::*;

use super::navbar::NavLink;

/// Disclosure-based dropdown menu.
///
/// Uses a native `<details>`/`<summary>` pair, so open/close behavior needs
/// no script and no component state.
#[component]
pub fn Dropdown(
    /// Trigger label.
    #[prop(into)]
    label: String,
    /// Ordered menu entries.
    #[prop(optional)]
    items: Vec<NavLink>,
) -> impl IntoView {
    let entries = items
        .into_iter()
        .map(|item| {
            view! {
                <li>
                    <a
                        href=item.href
                        class="block px-4 py-2 hover:bg-[var(--surface-alt)]"
                    >
                        {item.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <details class="relative inline-block">
            <summary class="cursor-pointer px-4 py-2 bg-[var(--surface)] border border-[var(--border)] rounded-md">
                {label}
            </summary>
            <ul class="absolute mt-2 w-48 bg-[var(--surface)] border border-[var(--border)] rounded-md shadow-md">
                {entries}
            </ul>
        </details>
    }
}
