use serde::{Deserialize, Serialize};

use frontdesk_types::{ReservationStatus, RoomStatus};

/// Abstract display color; renderers map it to their own palette
/// (ANSI for the CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    Green,
    Amber,
    Red,
    Blue,
    Gray,
    /// Fallback for anything that cannot be resolved (e.g. a dangling
    /// reference rendered as "N/A").  Presentation never errors.
    Neutral,
}

/// A label/color pair for one status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusPresentation {
    pub label: &'static str,
    pub color: StatusColor,
}

/// Neutral presentation used when no status can be resolved.
pub const NEUTRAL: StatusPresentation = StatusPresentation {
    label: "N/A",
    color: StatusColor::Neutral,
};

/// Display mapping for reservation statuses.  Stateless lookup table.
pub const fn reservation_presentation(status: ReservationStatus) -> StatusPresentation {
    match status {
        ReservationStatus::Confirmed => StatusPresentation {
            label: "Confirmed",
            color: StatusColor::Green,
        },
        ReservationStatus::Pending => StatusPresentation {
            label: "Pending",
            color: StatusColor::Amber,
        },
        ReservationStatus::Cancelled => StatusPresentation {
            label: "Cancelled",
            color: StatusColor::Red,
        },
        ReservationStatus::Completed => StatusPresentation {
            label: "Completed",
            color: StatusColor::Blue,
        },
    }
}

/// Display mapping for room statuses.  Stateless lookup table.
pub const fn room_presentation(status: RoomStatus) -> StatusPresentation {
    match status {
        RoomStatus::Available => StatusPresentation {
            label: "Available",
            color: StatusColor::Green,
        },
        RoomStatus::Occupied => StatusPresentation {
            label: "Occupied",
            color: StatusColor::Red,
        },
        RoomStatus::Maintenance => StatusPresentation {
            label: "Maintenance",
            color: StatusColor::Gray,
        },
        RoomStatus::Cleaning => StatusPresentation {
            label: "Cleaning",
            color: StatusColor::Blue,
        },
        RoomStatus::Reserved => StatusPresentation {
            label: "Reserved",
            color: StatusColor::Amber,
        },
    }
}
