//! Input components for text entry.

use leptos::prelude::*;

/// Text input component.
///
/// Uncontrolled by default; pass `value` + `on_input` for controlled usage.
/// Native attributes are forwarded to the underlying element unmodified.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input
///         input_type="email"
///         placeholder="you@example.com"
///         name="email"
///     />
/// }
/// ```
#[component]
pub fn Input(
    /// Input type (text, email, password, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Whether the input is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Whether the input is required.
    #[prop(default = false)]
    required: bool,
    /// Value attribute.
    #[prop(optional, into)]
    value: Option<String>,
    /// Input handler, called with the element's current value.
    #[prop(optional, into)]
    on_input: Option<Callback<String>>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Autocomplete attribute.
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    let base_classes = "w-full px-3 py-2 rounded-md bg-[var(--input-bg)] border border-[var(--input-border)] \
                        text-[var(--text-primary)] placeholder-[var(--input-placeholder)] \
                        focus:border-[var(--input-focus)] focus:ring-0";

    let classes = format!("{} {}", base_classes, class);

    view! {
        <input
            type=input_type
            class=classes
            placeholder=placeholder
            name=name
            id=id
            disabled=disabled
            required=required
            value=value
            autocomplete=autocomplete
            on:input=move |ev| {
                if let Some(cb) = on_input {
                    cb.run(event_target_value(&ev));
                }
            }
        />
    }
}

/// Textarea component for multi-line input.
#[component]
pub fn Textarea(
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Number of rows.
    #[prop(default = 3)]
    rows: u32,
    /// Whether the input is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Whether the input is required.
    #[prop(default = false)]
    required: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_classes = "w-full px-3 py-2 rounded-md bg-[var(--input-bg)] border border-[var(--input-border)] \
                        text-[var(--text-primary)] placeholder-[var(--input-placeholder)] \
                        focus:border-[var(--input-focus)] focus:ring-0 resize-none";

    let classes = format!("{} {}", base_classes, class);

    view! {
        <textarea
            class=classes
            placeholder=placeholder
            name=name
            id=id
            rows=rows
            disabled=disabled
            required=required
        />
    }
}
