use chrono::NaiveDate;

use frontdesk_engine::{CalendarGrid, DayCell, reservation_presentation};

use super::style::{dim, highlight, paint};

const LABEL_WIDTH: usize = 14;
const CELL_WIDTH: usize = 10;

/// Render the occupancy grid as text.
///
/// Wide windows (the 30-day view) are split into bands that fit
/// `max_width` columns; each band repeats the day header.  Each occupied
/// cell shows the first reservation's short id colored by status, with a
/// "▸" start-of-stay marker on its arrival day and a "+" suffix when more
/// than one reservation covers the cell (a double-booking).
pub fn render_calendar(
    grid: &CalendarGrid,
    today: NaiveDate,
    max_width: usize,
    color: bool,
) -> String {
    let per_band = ((max_width.saturating_sub(LABEL_WIDTH)) / CELL_WIDTH).max(1);

    let mut lines = Vec::new();

    let day_chunks: Vec<&[NaiveDate]> = grid.days.chunks(per_band).collect();
    for (band, chunk) in day_chunks.iter().enumerate() {
        if band > 0 {
            lines.push(String::new());
        }

        // Day header
        let mut header = format!("{:<width$}", "Room", width = LABEL_WIDTH);
        for day in *chunk {
            let label = format!("{:<width$}", day.format("%a %d/%m"), width = CELL_WIDTH);
            if *day == today {
                header.push_str(&highlight(&label, color));
            } else {
                header.push_str(&label);
            }
        }
        lines.push(header.trim_end().to_string());

        let rule = "-".repeat(LABEL_WIDTH + chunk.len() * CELL_WIDTH);
        lines.push(dim(&rule, color));

        for row in &grid.rows {
            let label = format!("{} {}", row.number, row.room_type.label());
            let mut line = format!("{:<width$}", label, width = LABEL_WIDTH);

            for day in *chunk {
                let cell = row
                    .cells
                    .iter()
                    .find(|c| c.day == *day)
                    .expect("grid rows cover every window day");
                line.push_str(&render_cell(cell, color));
            }
            lines.push(line.trim_end().to_string());
        }
    }

    lines.push(String::new());
    lines.push(legend(color));
    lines.join("\n")
}

fn render_cell(cell: &DayCell, color: bool) -> String {
    match cell.entries.first() {
        None => " ".repeat(CELL_WIDTH),
        Some(entry) => {
            let marker = if entry.is_arrival { '▸' } else { ' ' };
            let mut text = format!("{}{}", marker, &entry.reservation_id.short()[..6]);
            if cell.entries.len() > 1 {
                text.push('+');
            }
            let padded = format!("{:<width$}", text, width = CELL_WIDTH);
            paint(&padded, reservation_presentation(entry.status).color, color)
        }
    }
}

fn legend(color: bool) -> String {
    use frontdesk_types::ReservationStatus::*;

    let mut parts = Vec::new();
    for status in [Confirmed, Pending, Cancelled, Completed] {
        let p = reservation_presentation(status);
        parts.push(format!("{} {}", paint("●", p.color, color), p.label));
    }
    format!("Legend: {}   ▸ arrival day   + double-booked", parts.join("   "))
}
