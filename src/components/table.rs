//! Data table component.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

/// Table column descriptor: which row field to show and under what heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Row field looked up for each cell.
    pub key: String,
    /// Header cell text.
    pub title: String,
}

impl Column {
    /// Convenience constructor.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}

/// A table row: field name to raw cell value.
pub type Row = serde_json::Map<String, Value>;

/// Cell text for a row field. Raw lookup, no coercion or formatting;
/// a missing field or `null` renders nothing.
fn cell_text(row: &Row, key: &str) -> String {
    match row.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Data table driven by column descriptors crossed with row objects.
///
/// Columns define both the header order and the cell order within every row.
/// Empty `columns` or `data` degrade to an empty (but well-formed) table.
///
/// # Example
///
/// ```rust,ignore
/// let columns = vec![Column::new("name", "Name"), Column::new("role", "Role")];
/// let data = vec![row_one, row_two];
/// view! { <Table columns=columns data=data /> }
/// ```
#[component]
pub fn Table(
    /// Ordered column descriptors.
    #[prop(optional)]
    columns: Vec<Column>,
    /// Ordered row objects.
    #[prop(optional)]
    data: Vec<Row>,
) -> impl IntoView {
    trace!(columns = columns.len(), rows = data.len(), "rendering table");

    let header = columns
        .iter()
        .map(|col| {
            view! {
                <th class="px-4 py-2 text-left font-medium text-[var(--t-row-header-text)]">
                    {col.title.clone()}
                </th>
            }
        })
        .collect_view();

    let body = data
        .iter()
        .map(|row| {
            let cells = columns
                .iter()
                .map(|col| {
                    view! {
                        <td class="px-4 py-2 border-t border-[var(--t-border)]">
                            {cell_text(row, &col.key)}
                        </td>
                    }
                })
                .collect_view();

            view! {
                <tr class="hover:bg-[var(--t-row-hover)] transition-colors">
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="overflow-hidden rounded-lg border border-[var(--t-border)]">
            <table class="min-w-full text-[var(--t-text)]">
                <thead class="bg-[var(--t-header-bg)]">
                    <tr>{header}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
