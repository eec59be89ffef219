use chrono::NaiveDate;
use frontdesk_store::HotelStore;
use frontdesk_types::{Reservation, RoomId};

/// Reservations occupying `room_id` on `day`, in `(arrival, id)` order.
///
/// A stay covers the half-open interval `[arrival, departure)`: the
/// checkout day itself is free, so a departure and another arrival can
/// share a day without overlapping.  More than one result means the room
/// is double-booked; this query reports what exists, it does not prevent
/// it.
///
/// Pure function of the store snapshot and `day` (calendar-date
/// comparison, no time-of-day involved).
pub fn occupancy_on(store: &HotelStore, room_id: RoomId, day: NaiveDate) -> Vec<&Reservation> {
    store
        .reservations_for_room(room_id)
        .into_iter()
        .filter(|r| r.occupies(day))
        .collect()
}

/// Whether no reservation occupies `room_id` on `day`.
pub fn is_free(store: &HotelStore, room_id: RoomId, day: NaiveDate) -> bool {
    occupancy_on(store, room_id, day).is_empty()
}
