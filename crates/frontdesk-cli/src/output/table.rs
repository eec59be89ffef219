use frontdesk_engine::StatusColor;

use super::style::paint;

/// One table cell: text plus an optional status color.
pub struct Cell {
    pub text: String,
    pub color: Option<StatusColor>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: StatusColor) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// Render a fixed-width text table.  Widths come from the widest cell per
/// column; padding happens before painting so ANSI codes never skew
/// alignment.
pub fn render_table(headers: &[&str], rows: &[Vec<Cell>], color: bool) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.text.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(header_line.trim_end().to_string());

    let total: usize = widths.iter().sum::<usize>() + 2 * (columns.saturating_sub(1));
    lines.push("-".repeat(total));

    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .take(columns)
            .map(|(i, cell)| {
                let padded = format!("{:<width$}", cell.text, width = widths[i]);
                match cell.color {
                    Some(status_color) => paint(&padded, status_color, color),
                    None => padded,
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}
