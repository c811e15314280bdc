//! Comma-delimited text renderer.

use std::borrow::Cow;

use super::table::Table;

/// Quotes a field if it contains a comma, a double quote, or a newline.
///
/// Internal double quotes are doubled.
#[must_use]
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Renders the header line followed by one line per row, joined by `\n`
/// with no trailing newline.
#[must_use]
pub fn render_csv(table: &Table) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    lines.push(
        table
            .headers
            .iter()
            .map(|h| escape_field(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in table.body() {
        lines.push(
            row.iter()
                .map(|cell| escape_field(&cell.display()).into_owned())
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}
