// Engine module - pure computation over a store snapshot
// (availability, pricing, calendar grid, status presentation).
// No mutation: every function here reads the store and returns values.

pub mod availability;
pub mod calendar;
pub mod pricing;
pub mod status;

pub use availability::{is_free, occupancy_on};
pub use calendar::{
    CalendarGrid, CellEntry, DayCell, RoomRow, ViewMode, build_grid, shift, week_anchor, window,
};
pub use pricing::{compute_price, nights};
pub use status::{
    NEUTRAL, StatusColor, StatusPresentation, reservation_presentation, room_presentation,
};
