//! Button component with variants and sizes.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
    /// Muted/low-emphasis button.
    Muted,
    /// Outline button.
    Outline,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-[var(--primary)] text-white hover:bg-[var(--primary-dark)]",
            Self::Secondary => "bg-[var(--secondary)] text-white hover:bg-[var(--secondary-dark)]",
            Self::Muted => "bg-[var(--btn-muted-bg)] text-[var(--btn-muted-text)] hover:bg-[var(--btn-muted-hover)]",
            Self::Outline => "border border-[var(--border)] text-[var(--text-primary)] hover:bg-[var(--surface-alt)]",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1 text-sm",
            Self::Md => "px-4 py-2 text-base",
            Self::Lg => "px-5 py-3 text-lg",
        }
    }
}

/// Clickable button component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Primary size=ButtonSize::Md>
///         "Click me"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Whether the button is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Click handler.
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let base_classes =
        "inline-flex items-center justify-center font-medium rounded-md transition-all duration-200";

    let classes = format!(
        "{} {} {} {}",
        base_classes,
        variant.classes(),
        size.classes(),
        class
    );

    view! {
        <button
            type=button_type
            class=classes
            disabled=disabled
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
