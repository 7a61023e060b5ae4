//! Pagination control component.

use leptos::prelude::*;

use super::button::{Button, ButtonVariant};

/// Prev/Next pagination control with a "page / total" indicator.
///
/// Prev is disabled at page 1 and Next at `total_pages`; otherwise both are
/// enabled. Bounds are not validated here: keeping `page` within
/// `1..=total_pages` is the caller's responsibility, and `on_change` receives
/// the requested page unvalidated (Prev saturates at zero rather than
/// underflowing).
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Pagination page=2 total_pages=5 on_change=Callback::new(move |p| set_page.set(p)) />
/// }
/// ```
#[component]
pub fn Pagination(
    /// Current page, 1-based.
    page: usize,
    /// Total number of pages.
    total_pages: usize,
    /// Called with the requested page on Prev/Next activation.
    #[prop(optional, into)]
    on_change: Option<Callback<usize>>,
) -> impl IntoView {
    let prev_disabled = page == 1;
    let next_disabled = page == total_pages;

    let on_prev = Callback::new(move |()| {
        if let Some(cb) = on_change {
            cb.run(page.saturating_sub(1));
        }
    });
    let on_next = Callback::new(move |()| {
        if let Some(cb) = on_change {
            cb.run(page + 1);
        }
    });

    view! {
        <div class="flex space-x-2">
            <Button variant=ButtonVariant::Muted disabled=prev_disabled on_click=on_prev>
                "Prev"
            </Button>
            <span class="px-3 py-2">{format!("{page} / {total_pages}")}</span>
            <Button variant=ButtonVariant::Muted disabled=next_disabled on_click=on_next>
                "Next"
            </Button>
        </div>
    }
}
