use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{ClientId, ReservationId, RoomId};

/// Lifecycle status of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Pending",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Cancelled => "Cancelled",
            ReservationStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A stay booked for one room and one client.
///
/// Room and client are weak references by identifier: deleting the
/// referenced entity does not cascade here, and readers must tolerate a
/// dangling reference (render "N/A" rather than fail).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub room_id: RoomId,
    pub client_id: ClientId,

    pub arrival: NaiveDate,
    /// Checkout day; must be strictly after `arrival` for a valid stay.
    pub departure: NaiveDate,

    pub party_size: u32,
    pub status: ReservationStatus,
    pub total_price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Whether this stay occupies `day`.
    ///
    /// Stays cover the half-open interval `[arrival, departure)`: the
    /// arrival day is occupied, the checkout day is not, so back-to-back
    /// bookings can share a boundary day without overlapping.
    pub fn occupies(&self, day: NaiveDate) -> bool {
        self.arrival <= day && day < self.departure
    }
}

/// Field-wise update for a reservation; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationPatch {
    pub room_id: Option<RoomId>,
    pub client_id: Option<ClientId>,
    pub arrival: Option<NaiveDate>,
    pub departure: Option<NaiveDate>,
    pub party_size: Option<u32>,
    pub status: Option<ReservationStatus>,
    pub total_price: Option<f64>,
    pub comments: Option<String>,
}
