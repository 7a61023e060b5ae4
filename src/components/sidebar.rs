//! Sidebar navigation component.

use leptos::prelude::*;

use super::navbar::NavLink;

/// Vertical sidebar with a navigation list.
#[component]
pub fn Sidebar(
    /// Ordered navigation entries.
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
                        class="block px-3 py-2 rounded-md text-[var(--text-secondary)] hover:bg-[var(--surface-alt)] hover:text-[var(--text-primary)]"
                    >
                        {item.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <aside class="w-64 h-screen bg-[var(--surface)] border-r border-[var(--border)] p-4">
            <ul class="space-y-2">{entries}</ul>
        </aside>
    }
}
