use anyhow::Result;

use frontdesk_engine::room_presentation;
use frontdesk_store::RoomDraft;
use frontdesk_types::{Room, RoomPatch};

use super::{format_price, resolve_room};
use crate::args::RoomCommand;
use crate::context::AppContext;
use crate::output::style::OutputOpts;
use crate::output::table::{Cell, render_table};

pub fn handle(app: &mut AppContext, command: RoomCommand, opts: &OutputOpts) -> Result<()> {
    match command {
        RoomCommand::List { search } => list(app, search.as_deref(), opts),
        RoomCommand::Show { room } => show(app, &room, opts),
        RoomCommand::Add {
            number,
            room_type,
            price,
            capacity,
            floor,
            status,
            features,
            description,
            image,
        } => {
            let mut draft = RoomDraft::new(number, room_type.into(), price);
            draft.capacity = capacity;
            draft.floor = floor;
            draft.status = status.into();
            draft.features = features;
            draft.description = description;
            draft.image = image;

            let room = draft.build()?;
            let number = room.number.clone();
            let id = app.store.add_room(&app.session, room)?;
            app.save()?;

            println!("Created room {} ({})", number, id);
            Ok(())
        }
        RoomCommand::Update {
            room,
            number,
            room_type,
            price,
            capacity,
            floor,
            status,
            features,
            description,
            image,
        } => {
            let id = resolve_room(&app.store, &room)?.id;
            let patch = RoomPatch {
                number,
                room_type: room_type.map(Into::into),
                floor,
                price_per_night: price,
                capacity,
                status: status.map(Into::into),
                features: if features.is_empty() {
                    None
                } else {
                    Some(features)
                },
                description,
                image,
            };
            if patch.is_empty() {
                println!("Nothing to update");
                return Ok(());
            }

            let updated = app.store.update_room(&app.session, id, patch)?;
            let number = updated.number.clone();
            app.save()?;

            println!("Updated room {} ({})", number, id);
            Ok(())
        }
        RoomCommand::Rm { room } => {
            let id = resolve_room(&app.store, &room)?.id;
            let dangling = app.store.reservations_for_room(id).len();

            let removed = app.store.delete_room(&app.session, id)?;
            app.save()?;

            println!("Deleted room {} ({})", removed.number, id);
            if dangling > 0 {
                eprintln!(
                    "Warning: {} reservation(s) still reference the deleted room",
                    dangling
                );
            }
            Ok(())
        }
    }
}

fn list(app: &AppContext, search: Option<&str>, opts: &OutputOpts) -> Result<()> {
    let rooms = match search {
        Some(query) => app.store.search_rooms(query),
        None => app.store.rooms(),
    };

    if opts.json() {
        println!("{}", serde_json::to_string_pretty(&rooms)?);
        return Ok(());
    }

    if rooms.is_empty() {
        println!("No rooms");
        return Ok(());
    }

    let rows: Vec<Vec<Cell>> = rooms
        .iter()
        .map(|room| {
            let presentation = room_presentation(room.status);
            vec![
                Cell::plain(room.number.clone()),
                Cell::plain(room.room_type.label()),
                Cell::plain(room.floor.to_string()),
                Cell::plain(format_price(room.price_per_night, &app.config.currency)),
                Cell::plain(room.capacity.to_string()),
                Cell::colored(presentation.label, presentation.color),
                Cell::plain(room.features.join(", ")),
            ]
        })
        .collect();

    println!(
        "{}",
        render_table(
            &["NUMBER", "TYPE", "FLOOR", "PRICE/NIGHT", "CAP", "STATUS", "FEATURES"],
            &rows,
            opts.color,
        )
    );
    Ok(())
}

fn show(app: &AppContext, query: &str, opts: &OutputOpts) -> Result<()> {
    let room = resolve_room(&app.store, query)?;

    if opts.json() {
        println!("{}", serde_json::to_string_pretty(room)?);
        return Ok(());
    }

    print_room(room, app);

    let upcoming = app.store.reservations_for_room(room.id);
    if !upcoming.is_empty() {
        println!("  Reservations: {}", upcoming.len());
    }
    Ok(())
}

fn print_room(room: &Room, app: &AppContext) {
    println!("Room {} ({})", room.number, room.id);
    println!("  Type:     {}", room.room_type);
    println!("  Floor:    {}", room.floor);
    println!(
        "  Price:    {} / night",
        format_price(room.price_per_night, &app.config.currency)
    );
    println!("  Capacity: {}", room.capacity);
    println!("  Status:   {}", room_presentation(room.status).label);
    if !room.features.is_empty() {
        println!("  Features: {}", room.features.join(", "));
    }
    if let Some(description) = &room.description {
        println!("  Description: {}", description);
    }
    if let Some(image) = &room.image {
        println!("  Image:    {}", image);
    }
}
