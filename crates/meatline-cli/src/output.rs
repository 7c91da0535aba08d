//! Table/JSON rendering helpers shared by the list commands.

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::CliError;

/// Render rows as a table, or the raw payload as pretty JSON when the
/// global `--output json` flag is set.
pub fn render_list<R: Tabled, P: Serialize>(
    format: &str,
    rows: Vec<R>,
    payload: &P,
) -> Result<String, CliError> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(payload)?);
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    Ok(table.to_string())
}

/// Footer line under a listed page, e.g. `152 rows · 1 … 4 [5] 6 … 8`.
///
/// Uses the shared page-window algorithm so every list view collapses
/// hidden pages the same way.
pub fn pagination_footer(count: u64, current: u32, page_size: u32) -> String {
    let total = meatline_api::total_pages(count, page_size);
    if total <= 1 {
        return format!("{count} rows");
    }
    let window = meatline_api::page_window(total, current)
        .into_iter()
        .map(|item| match item {
            meatline_api::PageItem::Page(p) if p == current => format!("[{p}]"),
            meatline_api::PageItem::Page(p) => p.to_string(),
            meatline_api::PageItem::Ellipsis => "…".to_owned(),
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("{count} rows · {}", window.dimmed())
}

/// Placeholder for optional cell values.
pub fn dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".into())
}
