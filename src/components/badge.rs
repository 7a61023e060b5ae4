//! Badge component for status indicators and tags.

use leptos::prelude::*;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Primary badge (default).
    #[default]
    Primary,
    /// Secondary badge.
    Secondary,
    /// Success/positive badge.
    Success,
    /// Warning badge.
    Warning,
    /// Error/destructive badge.
    Error,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-[var(--primary)] text-white",
            Self::Secondary => "bg-[var(--secondary)] text-white",
            Self::Success => "bg-[var(--success)] text-white",
            Self::Warning => "bg-[var(--warning)] text-black",
            Self::Error => "bg-[var(--error)] text-white",
        }
    }
}

/// Badge component for displaying status or labels.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge variant=BadgeVariant::Success>"Active"</Badge>
///     <Badge variant=BadgeVariant::Warning>"Pending"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Primary)]
    variant: BadgeVariant,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let classes = format!("px-2 py-0.5 rounded-md text-sm {}", variant.classes());

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}
