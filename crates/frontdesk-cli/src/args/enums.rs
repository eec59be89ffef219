use clap::ValueEnum;

use frontdesk_engine::ViewMode;
use frontdesk_types::{ReservationStatus, RoomStatus, RoomType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Week,
    Month,
}

impl From<ViewArg> for ViewMode {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Week => ViewMode::Week,
            ViewArg::Month => ViewMode::Month,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoomTypeArg {
    Simple,
    Double,
    Twin,
    Suite,
    Family,
}

impl From<RoomTypeArg> for RoomType {
    fn from(room_type: RoomTypeArg) -> Self {
        match room_type {
            RoomTypeArg::Simple => RoomType::Simple,
            RoomTypeArg::Double => RoomType::Double,
            RoomTypeArg::Twin => RoomType::Twin,
            RoomTypeArg::Suite => RoomType::Suite,
            RoomTypeArg::Family => RoomType::Family,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoomStatusArg {
    Available,
    Occupied,
    Maintenance,
    Cleaning,
    Reserved,
}

impl From<RoomStatusArg> for RoomStatus {
    fn from(status: RoomStatusArg) -> Self {
        match status {
            RoomStatusArg::Available => RoomStatus::Available,
            RoomStatusArg::Occupied => RoomStatus::Occupied,
            RoomStatusArg::Maintenance => RoomStatus::Maintenance,
            RoomStatusArg::Cleaning => RoomStatus::Cleaning,
            RoomStatusArg::Reserved => RoomStatus::Reserved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReservationStatusArg {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl From<ReservationStatusArg> for ReservationStatus {
    fn from(status: ReservationStatusArg) -> Self {
        match status {
            ReservationStatusArg::Pending => ReservationStatus::Pending,
            ReservationStatusArg::Confirmed => ReservationStatus::Confirmed,
            ReservationStatusArg::Cancelled => ReservationStatus::Cancelled,
            ReservationStatusArg::Completed => ReservationStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
