use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::RoomId;

/// Room category offered by the hotel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Simple,
    Double,
    Twin,
    Suite,
    Family,
}

impl RoomType {
    pub const fn label(&self) -> &'static str {
        match self {
            RoomType::Simple => "Simple",
            RoomType::Double => "Double",
            RoomType::Twin => "Twin",
            RoomType::Suite => "Suite",
            RoomType::Family => "Family",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Operational status of a room.
///
/// A rendering hint for the back office, not a derived quantity: it is set
/// by staff and is independent of whether reservations cover today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    Cleaning,
    Reserved,
}

impl RoomStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Maintenance => "Maintenance",
            RoomStatus::Cleaning => "Cleaning",
            RoomStatus::Reserved => "Reserved",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A hotel room.
///
/// `number` is the display identifier shown to staff and guests ("101",
/// "2B"); it must be unique within the hotel. `id` is the stable internal
/// reference used by reservations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub number: String,
    pub room_type: RoomType,
    pub floor: i32,
    pub price_per_night: f64,
    pub capacity: u32,
    pub status: RoomStatus,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Reference to an image asset (path or URL); never dereferenced here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Field-wise update for a room; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomPatch {
    pub number: Option<String>,
    pub room_type: Option<RoomType>,
    pub floor: Option<i32>,
    pub price_per_night: Option<f64>,
    pub capacity: Option<u32>,
    pub status: Option<RoomStatus>,
    pub features: Option<Vec<String>>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl RoomPatch {
    pub fn is_empty(&self) -> bool {
        self.number.is_none()
            && self.room_type.is_none()
            && self.floor.is_none()
            && self.price_per_night.is_none()
            && self.capacity.is_none()
            && self.status.is_none()
            && self.features.is_none()
            && self.description.is_none()
            && self.image.is_none()
    }
}
