//! Terminal rendering of the merged comparison table.

use jeju_weather_core::{MergedTable, Metric};

const DATE_HEADER: &str = "date";
const MISSING_CELL: &str = "-";
const MIN_COLUMN_WIDTH: usize = 8;

/// Render the merged table as fixed-width text: a date column plus one
/// column per region, missing cells shown as `-`. The header line
/// carries the metric label and axis unit.
pub fn render_table(table: &MergedTable, metric: Metric) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", metric.label(), metric.unit()));

    if table.rows.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let date_width = DATE_HEADER.len().max(10);
    let widths: Vec<usize> = table
        .regions
        .iter()
        .map(|region| region.chars().count().max(MIN_COLUMN_WIDTH))
        .collect();

    out.push_str(&pad(DATE_HEADER, date_width));
    for (region, width) in table.regions.iter().zip(&widths) {
        out.push_str("  ");
        out.push_str(&pad(region, *width));
    }
    out.push('\n');

    let total = date_width + widths.iter().map(|w| w + 2).sum::<usize>();
    out.push_str(&"-".repeat(total));
    out.push('\n');

    for row in &table.rows {
        out.push_str(&pad(&row.date.to_string(), date_width));
        for (value, width) in row.values.iter().zip(&widths) {
            let cell = match value {
                Some(v) => format!("{v:.1}"),
                None => MISSING_CELL.to_string(),
            };
            out.push_str("  ");
            out.push_str(&pad(&cell, *width));
        }
        out.push('\n');
    }

    out
}

/// Left-pad to `width` counted in chars; `format!` width counts bytes
/// and would misalign the Korean region headers.
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), text)
    }
}
