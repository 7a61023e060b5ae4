//! Avatar component with image and fallback support.

use leptos::prelude::*;

/// Avatar component for displaying user images.
///
/// Renders a round image sized in pixels. When `src` is empty the `fallback`
/// initials are shown instead.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar src="/images/user.jpg" alt="User" size=48 />
/// }
/// ```
#[component]
pub fn Avatar(
    /// Image source URL.
    #[prop(optional, into)]
    src: String,
    /// Alt text for the image.
    #[prop(default = "Avatar")]
    alt: &'static str,
    /// Fallback text (initials) when no image source is given.
    #[prop(optional, into)]
    fallback: String,
    /// Width and height in pixels.
    #[prop(default = 40)]
    size: u32,
) -> impl IntoView {
    let style = format!("width: {size}px; height: {size}px;");

    if src.is_empty() {
        view! {
            <span
                class="flex items-center justify-center rounded-full bg-[var(--surface-alt)] text-[var(--text-secondary)] text-sm font-medium"
                style=style
            >
                {fallback}
            </span>
        }
        .into_any()
    } else {
        view! {
            <img src=src alt=alt class="rounded-full object-cover" style=style />
        }
        .into_any()
    }
}
