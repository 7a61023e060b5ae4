//! Alert component for inline status messages.

use leptos::prelude::*;

/// Alert severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertKind {
    /// Informational alert (default).
    #[default]
    Info,
    /// Success alert.
    Success,
    /// Warning alert.
    Warning,
    /// Error alert.
    Error,
}

impl AlertKind {
    /// Get CSS classes for this severity.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Info => "bg-[var(--info-bg)] text-[var(--info)]",
            Self::Success => "bg-[var(--success-bg)] text-[var(--success)]",
            Self::Warning => "bg-[var(--warning-bg)] text-[var(--warning)]",
            Self::Error => "bg-[var(--error-bg)] text-[var(--error)]",
        }
    }
}

/// Inline alert banner.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Alert kind=AlertKind::Error message="Something went wrong" />
/// }
/// ```
#[component]
pub fn Alert(
    /// Alert severity.
    #[prop(default = AlertKind::Info)]
    kind: AlertKind,
    /// Message text.
    #[prop(into)]
    message: String,
) -> impl IntoView {
    let classes = format!("p-3 rounded-md {}", kind.classes());

    view! {
        <div class=classes>
            {message}
        </div>
    }
}
