use chrono::NaiveDate;
use clap::Subcommand;
use std::path::PathBuf;

use super::enums::{
    ExportFormat, ReservationStatusArg, RoomStatusArg, RoomTypeArg, ViewArg,
};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Initialize the data directory and default configuration")]
    Init {
        /// Seed a demo hotel (rooms, clients and reservations around today)
        #[arg(long)]
        sample: bool,
    },

    #[command(about = "Manage rooms")]
    Room {
        #[command(subcommand)]
        command: RoomCommand,
    },

    #[command(about = "Manage clients")]
    Client {
        #[command(subcommand)]
        command: ClientCommand,
    },

    #[command(about = "Manage reservations")]
    Reservation {
        #[command(subcommand)]
        command: ReservationCommand,
    },

    #[command(about = "Render the day-by-room occupancy calendar")]
    Calendar {
        /// Anchor date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Window size: a week, or a rolling 30-day span
        #[arg(long, value_enum)]
        view: Option<ViewArg>,

        /// Restrict rows to one room (display number or id prefix)
        #[arg(long)]
        room: Option<String>,

        /// Shift the window: -1 for previous, 1 for next, etc.
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset: i32,
    },

    #[command(about = "Export data to CSV or JSON")]
    Export {
        #[command(subcommand)]
        command: ExportCommand,
    },
}

#[derive(Subcommand)]
pub enum RoomCommand {
    #[command(about = "List rooms")]
    List {
        /// Case-insensitive substring over number, type and features
        #[arg(long)]
        search: Option<String>,
    },

    #[command(about = "Show one room in full")]
    Show {
        /// Display number or id prefix
        room: String,
    },

    #[command(about = "Add a room")]
    Add {
        /// Display number ("101", "2B")
        number: String,

        #[arg(long = "type", value_enum)]
        room_type: RoomTypeArg,

        /// Nightly price
        #[arg(long)]
        price: f64,

        #[arg(long, default_value = "1")]
        capacity: u32,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        floor: i32,

        #[arg(long, value_enum, default_value = "available")]
        status: RoomStatusArg,

        /// Repeatable: --feature "Sea view" --feature Balcony
        #[arg(long = "feature")]
        features: Vec<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        image: Option<String>,
    },

    #[command(about = "Update fields of a room (absent flags left untouched)")]
    Update {
        /// Display number or id prefix
        room: String,

        #[arg(long)]
        number: Option<String>,

        #[arg(long = "type", value_enum)]
        room_type: Option<RoomTypeArg>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        capacity: Option<u32>,

        #[arg(long, allow_hyphen_values = true)]
        floor: Option<i32>,

        #[arg(long, value_enum)]
        status: Option<RoomStatusArg>,

        /// Repeatable; replaces the whole feature set when given
        #[arg(long = "feature")]
        features: Vec<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        image: Option<String>,
    },

    #[command(about = "Delete a room (reservations pointing at it are left dangling)")]
    Rm {
        /// Display number or id prefix
        room: String,
    },
}

#[derive(Subcommand)]
pub enum ClientCommand {
    #[command(about = "List clients")]
    List {
        /// Case-insensitive substring over names, email and phone
        #[arg(long)]
        search: Option<String>,
    },

    #[command(about = "Show one client in full, with their reservations")]
    Show {
        /// Identifier prefix
        client: String,
    },

    #[command(about = "Add a client")]
    Add {
        last_name: String,
        first_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        street: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        postal_code: Option<String>,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        date_of_birth: Option<NaiveDate>,

        #[arg(long)]
        document_type: Option<String>,

        #[arg(long)]
        document_number: Option<String>,
    },

    #[command(about = "Update fields of a client (absent flags left untouched)")]
    Update {
        /// Identifier prefix
        client: String,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        street: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        postal_code: Option<String>,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        date_of_birth: Option<NaiveDate>,

        #[arg(long)]
        document_type: Option<String>,

        #[arg(long)]
        document_number: Option<String>,
    },

    #[command(about = "Delete a client (blocked while reservations reference them)")]
    Rm {
        /// Identifier prefix
        client: String,
    },
}

#[derive(Subcommand)]
pub enum ReservationCommand {
    #[command(about = "List reservations")]
    List {
        /// Restrict to one room (display number or id prefix)
        #[arg(long)]
        room: Option<String>,

        /// Restrict to one client (id prefix)
        #[arg(long)]
        client: Option<String>,

        #[arg(long, value_enum)]
        status: Option<ReservationStatusArg>,
    },

    #[command(about = "Show one reservation in full")]
    Show {
        /// Identifier prefix
        reservation: String,
    },

    #[command(about = "Book a stay")]
    Add {
        /// Room display number or id prefix
        #[arg(long)]
        room: String,

        /// Client id prefix
        #[arg(long)]
        client: String,

        #[arg(long)]
        arrival: NaiveDate,

        /// Checkout day (must be after arrival)
        #[arg(long)]
        departure: NaiveDate,

        #[arg(long, default_value = "1")]
        party_size: u32,

        #[arg(long, value_enum, default_value = "pending")]
        status: ReservationStatusArg,

        /// Manual price override; computed from the room and dates when absent
        #[arg(long)]
        total_price: Option<f64>,

        #[arg(long)]
        comments: Option<String>,
    },

    #[command(about = "Update fields of a reservation (absent flags left untouched)")]
    Update {
        /// Identifier prefix
        reservation: String,

        /// Move to another room (display number or id prefix)
        #[arg(long)]
        room: Option<String>,

        /// Reassign to another client (id prefix)
        #[arg(long)]
        client: Option<String>,

        #[arg(long)]
        arrival: Option<NaiveDate>,

        #[arg(long)]
        departure: Option<NaiveDate>,

        #[arg(long)]
        party_size: Option<u32>,

        #[arg(long, value_enum)]
        status: Option<ReservationStatusArg>,

        /// Manual price override; recomputed on room/date change when absent
        #[arg(long)]
        total_price: Option<f64>,

        #[arg(long)]
        comments: Option<String>,
    },

    #[command(about = "Delete a reservation")]
    Rm {
        /// Identifier prefix
        reservation: String,
    },
}

#[derive(Subcommand)]
pub enum ExportCommand {
    #[command(about = "Export all reservations")]
    Reservations {
        /// Output file (stdout when absent)
        #[arg(long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },
}
