//! Top navigation bar component.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Navigation link descriptor, shared by [`Navbar`], `Sidebar` and `Dropdown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Link text (also the stable identity of the entry).
    pub label: String,
    /// Link target.
    pub href: String,
}

impl NavLink {
    /// Convenience constructor.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Horizontal navigation bar with a brand slot and a link row.
///
/// # Example
///
/// ```rust,ignore
/// let links = vec![NavLink::new("Docs", "/docs"), NavLink::new("About", "/about")];
/// view! { <Navbar brand="Acme" links=links /> }
/// ```
#[component]
pub fn Navbar(
    /// Brand text shown on the left.
    #[prop(into)]
    brand: String,
    /// Ordered navigation links.
    #[prop(optional)]
    links: Vec<NavLink>,
) -> impl IntoView {
    let items = links
        .into_iter()
        .map(|link| {
            view! {
                <a
                    href=link.href
                    class="text-[var(--text-secondary)] hover:text-[var(--primary)] transition"
                >
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="w-full bg-[var(--surface)] border-b border-[var(--border)] px-6 py-3 flex items-center justify-between">
            <div class="text-xl font-semibold text-[var(--text-primary)]">{brand}</div>
            <div class="flex space-x-6">{items}</div>
        </nav>
    }
}
