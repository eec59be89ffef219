// NOTE: Command Organization
//
// Subcommands are namespaced per entity (room, client, reservation) plus
// the calendar and export verbs, mirroring how the back office is used:
// `frontdesk room list`, `frontdesk reservation add`, `frontdesk calendar`.

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "frontdesk")]
#[command(about = "Hotel back office: rooms, clients, reservations and the occupancy calendar", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to the platform data dir, or ~/.frontdesk)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
