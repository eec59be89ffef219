pub mod calendar;
pub mod client;
pub mod export;
pub mod init;
pub mod reservation;
pub mod room;

use anyhow::{Result, anyhow};

use frontdesk_store::HotelStore;
use frontdesk_types::{Client, Reservation, Room};

// Lookup helpers shared by the entity handlers.  Each resolves a
// user-supplied reference (display number or id prefix) or fails with a
// message the operator can act on.

pub(crate) fn resolve_room<'a>(store: &'a HotelStore, query: &str) -> Result<&'a Room> {
    store
        .find_room(query)
        .ok_or_else(|| anyhow!("room not found: {}", query))
}

pub(crate) fn resolve_client<'a>(store: &'a HotelStore, query: &str) -> Result<&'a Client> {
    store
        .find_client(query)
        .ok_or_else(|| anyhow!("client not found: {}", query))
}

pub(crate) fn resolve_reservation<'a>(
    store: &'a HotelStore,
    query: &str,
) -> Result<&'a Reservation> {
    store
        .find_reservation(query)
        .ok_or_else(|| anyhow!("reservation not found: {}", query))
}

/// Format a price with the configured currency ("300.00 EUR").
pub(crate) fn format_price(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}
