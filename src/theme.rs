//! Style variable contract.
//!
//! Components style themselves through Tailwind arbitrary values over CSS
//! custom properties (`bg-[var(--primary)]` etc.). The crate defines no
//! values for these properties; the consuming application's stylesheet must.
//! An undefined property degrades silently (the class simply resolves to
//! nothing), matching the rest of the library's no-validation stance.

/// Every CSS custom property referenced by the component class strings.
///
/// Consumers can use this list to audit their theme stylesheet.
pub const REQUIRED_VARIABLES: &[&str] = &[
    // Palette
    "--primary",
    "--primary-dark",
    "--secondary",
    "--secondary-dark",
    // Button (muted variant)
    "--btn-muted-bg",
    "--btn-muted-text",
    "--btn-muted-hover",
    // Surfaces and lines
    "--surface",
    "--surface-alt",
    "--border",
    "--divider",
    // Text
    "--text-primary",
    "--text-secondary",
    // Inputs
    "--input-bg",
    "--input-border",
    "--input-placeholder",
    "--input-focus",
    // Status colors (badge, alert)
    "--info",
    "--info-bg",
    "--success",
    "--success-bg",
    "--warning",
    "--warning-bg",
    "--error",
    "--error-bg",
    // Table
    "--t-border",
    "--t-text",
    "--t-header-bg",
    "--t-row-header-text",
    "--t-row-hover",
    // Stacking
    "--z-modal",
];
