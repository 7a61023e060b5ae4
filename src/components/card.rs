//! Card container and header components.

use leptos::prelude::*;

/// Card container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card>
///         <CardHeader title="Settings" />
///         <p>"Content goes here"</p>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "bg-[var(--surface)] border border-[var(--border)] rounded-lg p-4 shadow-sm {}",
        class
    );

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card header section with an optional title heading.
#[component]
pub fn CardHeader(
    /// Title text; the heading is omitted entirely when absent.
    #[prop(optional, into)]
    title: Option<String>,
    /// Extra header content below the title.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="mb-3 border-b border-[var(--divider)] pb-2">
            {title.map(|t| view! {
                <h2 class="text-lg font-semibold text-[var(--text-primary)]">{t}</h2>
            })}
            {children.map(|c| c())}
        </div>
    }
}
