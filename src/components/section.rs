//! Section wrapper component.

use leptos::prelude::*;

/// Page section with a heading.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Section title="Account">
///         <Card>"..."</Card>
///     </Section>
/// }
/// ```
#[component]
pub fn Section(
    /// Section heading text.
    #[prop(into)]
    title: String,
    /// Section content.
    children: Children,
) -> impl IntoView {
    view! {
        <section class="mb-10">
            <h1 class="text-2xl font-bold text-[var(--text-primary)] mb-4">{title}</h1>
            {children()}
        </section>
    }
}
