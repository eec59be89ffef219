use chrono::{Datelike, Days, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use frontdesk_store::HotelStore;
use frontdesk_types::{ReservationId, ReservationStatus, Room, RoomId, RoomType};

use crate::availability::occupancy_on;

/// Calendar window size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Week,
    Month,
}

impl ViewMode {
    /// Week shows 7 days; Month is a rolling 30-day span, NOT aligned to
    /// calendar-month boundaries.
    pub const fn window_days(&self) -> u64 {
        match self {
            ViewMode::Week => 7,
            ViewMode::Month => 30,
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Week
    }
}

/// The Monday on or before `date` (ISO week, week starts Monday).
pub fn week_anchor(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// The visible days for an anchor: `window_days` consecutive days starting
/// at the Monday on or before the anchor.  Both view modes start at the
/// week anchor; Month just extends the same span to 30 days.
pub fn window(anchor: NaiveDate, mode: ViewMode) -> Vec<NaiveDate> {
    let start = week_anchor(anchor);
    (0..mode.window_days())
        .map(|offset| start + Days::new(offset))
        .collect()
}

/// Move the raw anchor by whole windows (±7 days in Week mode, ±30 in
/// Month mode).  "Today" navigation is just an anchor reset at the caller;
/// none of this touches the store.
pub fn shift(anchor: NaiveDate, mode: ViewMode, windows: i32) -> NaiveDate {
    anchor + Duration::days(mode.window_days() as i64 * i64::from(windows))
}

/// One reservation marker inside a day cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellEntry {
    pub reservation_id: ReservationId,
    pub status: ReservationStatus,
    /// True when this day is the stay's arrival day (start-of-stay marker).
    pub is_arrival: bool,
}

/// One (room, day) cell.  Multiple entries mean a double-booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub day: NaiveDate,
    pub entries: Vec<CellEntry>,
}

/// One room's row across the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub number: String,
    pub room_type: RoomType,
    pub cells: Vec<DayCell>,
}

/// The renderable day-by-room matrix for one navigation window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub view: ViewMode,
    pub start: NaiveDate,
    pub days: Vec<NaiveDate>,
    pub rows: Vec<RoomRow>,
}

/// Build the occupancy grid for a window.
///
/// Rows are all rooms ordered by display number, or the single room named
/// by `room_filter`.  Deterministic for a fixed store snapshot: calling it
/// twice with the same arguments yields an identical matrix.
pub fn build_grid(
    store: &HotelStore,
    anchor: NaiveDate,
    mode: ViewMode,
    room_filter: Option<RoomId>,
) -> CalendarGrid {
    let days = window(anchor, mode);
    let start = week_anchor(anchor);

    let rooms: Vec<&Room> = match room_filter {
        Some(id) => store.room(id).into_iter().collect(),
        None => store.rooms(),
    };

    let rows = rooms
        .into_iter()
        .map(|room| RoomRow {
            room_id: room.id,
            number: room.number.clone(),
            room_type: room.room_type,
            cells: days
                .iter()
                .map(|&day| DayCell {
                    day,
                    entries: occupancy_on(store, room.id, day)
                        .into_iter()
                        .map(|r| CellEntry {
                            reservation_id: r.id,
                            status: r.status,
                            is_arrival: r.arrival == day,
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    CalendarGrid {
        view: mode,
        start,
        days,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use frontdesk_testing::SampleHotel;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_week_anchor_is_monday_on_or_before() {
        // 2024-03-13 is a Wednesday
        assert_eq!(week_anchor(day("2024-03-13")), day("2024-03-11"));
        // Monday anchors to itself
        assert_eq!(week_anchor(day("2024-03-11")), day("2024-03-11"));
        // Sunday anchors to the previous Monday
        assert_eq!(week_anchor(day("2024-03-17")), day("2024-03-11"));
        assert_eq!(week_anchor(day("2024-03-13")).weekday(), Weekday::Mon);
    }

    #[test]
    fn test_window_sizes() {
        assert_eq!(window(day("2024-03-13"), ViewMode::Week).len(), 7);
        assert_eq!(window(day("2024-03-13"), ViewMode::Month).len(), 30);
    }

    #[test]
    fn test_month_window_is_rolling_not_month_aligned() {
        // 2024-02-01 is a Thursday; the window starts the Monday before,
        // in January, and runs 30 consecutive days.
        let days = window(day("2024-02-01"), ViewMode::Month);
        assert_eq!(days[0], day("2024-01-29"));
        assert_eq!(days[29], day("2024-02-27"));
    }

    #[test]
    fn test_week_navigation_moves_window_by_seven_days() {
        let anchor = day("2024-03-13");
        let here = window(anchor, ViewMode::Week);
        let next = window(shift(anchor, ViewMode::Week, 1), ViewMode::Week);
        let prev = window(shift(anchor, ViewMode::Week, -1), ViewMode::Week);

        assert_eq!(next[0], here[0] + Days::new(7));
        assert_eq!(prev[0], here[0] - Days::new(7));
    }

    #[test]
    fn test_month_navigation_moves_anchor_by_thirty_days() {
        let anchor = day("2024-03-13");
        assert_eq!(shift(anchor, ViewMode::Month, 1), day("2024-04-12"));
        assert_eq!(shift(anchor, ViewMode::Month, -1), day("2024-02-12"));
    }

    #[test]
    fn test_grid_rows_ordered_by_room_number() {
        let hotel = SampleHotel::new();
        let grid = build_grid(&hotel.store, day("2024-03-13"), ViewMode::Week, None);

        let numbers: Vec<&str> = grid.rows.iter().map(|r| r.number.as_str()).collect();
        let mut sorted = numbers.clone();
        sorted.sort();
        assert_eq!(numbers, sorted);
        assert!(grid.rows.len() > 1);
    }

    #[test]
    fn test_grid_room_filter_restricts_rows() {
        let hotel = SampleHotel::new();
        let room = hotel.room_id("101");
        let grid = build_grid(&hotel.store, day("2024-03-13"), ViewMode::Week, Some(room));

        assert_eq!(grid.rows.len(), 1);
        assert_eq!(grid.rows[0].number, "101");
    }

    #[test]
    fn test_grid_marks_arrival_days() {
        let mut hotel = SampleHotel::new();
        let stay = hotel.book("101", "2024-03-12", "2024-03-14");
        let room = hotel.room_id("101");

        let grid = build_grid(&hotel.store, day("2024-03-13"), ViewMode::Week, Some(room));
        let row = &grid.rows[0];

        let cell = |d: &str| row.cells.iter().find(|c| c.day == day(d)).unwrap();

        let arrival = cell("2024-03-12");
        assert_eq!(arrival.entries.len(), 1);
        assert_eq!(arrival.entries[0].reservation_id, stay);
        assert!(arrival.entries[0].is_arrival);

        let second_night = cell("2024-03-13");
        assert!(!second_night.entries[0].is_arrival);

        let checkout = cell("2024-03-14");
        assert!(checkout.entries.is_empty());
    }

    #[test]
    fn test_back_to_back_stays_no_phantom_overlap() {
        let mut hotel = SampleHotel::new();
        let _a = hotel.book("101", "2024-03-10", "2024-03-13");
        let b = hotel.book("101", "2024-03-13", "2024-03-15");
        let room = hotel.room_id("101");

        let grid = build_grid(&hotel.store, day("2024-03-13"), ViewMode::Week, Some(room));
        let boundary = grid.rows[0]
            .cells
            .iter()
            .find(|c| c.day == day("2024-03-13"))
            .unwrap();

        assert_eq!(boundary.entries.len(), 1);
        assert_eq!(boundary.entries[0].reservation_id, b);
        assert!(boundary.entries[0].is_arrival);
    }

    #[test]
    fn test_grid_is_idempotent_for_fixed_store() {
        let mut hotel = SampleHotel::new();
        hotel.book("101", "2024-03-10", "2024-03-13");
        hotel.book("102", "2024-03-12", "2024-03-16");

        let a = build_grid(&hotel.store, day("2024-03-13"), ViewMode::Month, None);
        let b = build_grid(&hotel.store, day("2024-03-13"), ViewMode::Month, None);
        assert_eq!(a, b);
    }
}
