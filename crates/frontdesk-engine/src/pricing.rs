use chrono::NaiveDate;
use frontdesk_types::Room;

/// Number of billable nights for a stay.
///
/// `max(1, departure - arrival)`: a same-day or inverted range still bills
/// one night, so a price can never come out zero or negative even when the
/// caller skipped date-order validation.
pub fn nights(arrival: NaiveDate, departure: NaiveDate) -> i64 {
    (departure - arrival).num_days().max(1)
}

/// Total stay price: billable nights times the room's nightly rate.
///
/// Callers recompute this whenever the room or the date range of an
/// in-progress reservation changes; a manual override simply replaces the
/// result before the reservation is committed.
pub fn compute_price(room: &Room, arrival: NaiveDate, departure: NaiveDate) -> f64 {
    nights(arrival, departure) as f64 * room.price_per_night
}
