use anyhow::Result;
use std::path::Path;

use crate::args::{Cli, Commands};
use crate::config::resolve_data_dir;
use crate::context::AppContext;
use crate::handlers;
use crate::output::style::OutputOpts;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let opts = OutputOpts::new(cli.format, cli.no_color);

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    match command {
        Commands::Init { sample } => handlers::init::handle(&data_dir, sample),

        Commands::Room { command } => {
            let mut app = AppContext::load(&data_dir)?;
            handlers::room::handle(&mut app, command, &opts)
        }

        Commands::Client { command } => {
            let mut app = AppContext::load(&data_dir)?;
            handlers::client::handle(&mut app, command, &opts)
        }

        Commands::Reservation { command } => {
            let mut app = AppContext::load(&data_dir)?;
            handlers::reservation::handle(&mut app, command, &opts)
        }

        Commands::Calendar {
            date,
            view,
            room,
            offset,
        } => {
            let app = AppContext::load(&data_dir)?;
            handlers::calendar::handle(&app, date, view, room, offset, &opts)
        }

        Commands::Export { command } => {
            let app = AppContext::load(&data_dir)?;
            handlers::export::handle(&app, command)
        }
    }
}

fn show_guidance(data_dir: &Path) {
    let initialized = data_dir.join("hotel.json").exists();

    println!("frontdesk - hotel back office\n");

    if initialized {
        println!("Quick commands:");
        println!("  frontdesk calendar                # Occupancy grid for this week");
        println!("  frontdesk room list               # Rooms");
        println!("  frontdesk reservation list        # Reservations");
        println!("  frontdesk reservation add --room 101 --client <ID> \\");
        println!("      --arrival 2024-03-10 --departure 2024-03-13");
    } else {
        println!("Get started:");
        println!("  frontdesk init --sample\n");
        println!("The init command will:");
        println!("  1. Create the data directory and default config");
        println!("  2. Seed a demo hotel (with --sample)");
        println!("  3. Leave everything editable via room/client/reservation commands");
    }

    println!();
    println!("For more commands:");
    println!("  frontdesk --help");
}
