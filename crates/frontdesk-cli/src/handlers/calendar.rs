use anyhow::Result;
use chrono::NaiveDate;

use frontdesk_engine::{ViewMode, build_grid, shift, week_anchor, window};

use super::resolve_room;
use crate::args::ViewArg;
use crate::context::AppContext;
use crate::output::calendar::render_calendar;
use crate::output::style::OutputOpts;

/// Default render width when stdout is not a terminal (tests, pipes).
const FALLBACK_WIDTH: usize = 120;

pub fn handle(
    app: &AppContext,
    date: Option<NaiveDate>,
    view: Option<ViewArg>,
    room: Option<String>,
    offset: i32,
    opts: &OutputOpts,
) -> Result<()> {
    let view: ViewMode = view.map(Into::into).unwrap_or(app.config.default_view);

    // "Today" is the default anchor; --offset navigates whole windows from
    // whatever anchor was chosen.
    let anchor = shift(date.unwrap_or_else(|| app.today()), view, offset);

    let room_filter = match &room {
        Some(query) => Some(resolve_room(&app.store, query)?.id),
        None => None,
    };

    let grid = build_grid(&app.store, anchor, view, room_filter);

    if opts.json() {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    let days = window(anchor, view);
    let last = days[days.len() - 1];
    println!(
        "{}: {} to {} ({} view)",
        app.config.hotel_name,
        week_anchor(anchor).format("%d %b %Y"),
        last.format("%d %b %Y"),
        match view {
            ViewMode::Week => "week",
            ViewMode::Month => "30-day",
        },
    );
    println!();

    let width = terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(FALLBACK_WIDTH);
    println!("{}", render_calendar(&grid, app.today(), width, opts.color));
    Ok(())
}
