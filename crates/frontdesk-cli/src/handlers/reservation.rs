use anyhow::Result;
use chrono::Utc;

use frontdesk_engine::{compute_price, nights, reservation_presentation};
use frontdesk_store::ReservationDraft;
use frontdesk_types::{Reservation, ReservationPatch};

use super::{format_price, resolve_client, resolve_reservation, resolve_room};
use crate::args::ReservationCommand;
use crate::context::AppContext;
use crate::output::style::OutputOpts;
use crate::output::table::{Cell, render_table};

pub fn handle(app: &mut AppContext, command: ReservationCommand, opts: &OutputOpts) -> Result<()> {
    match command {
        ReservationCommand::List {
            room,
            client,
            status,
        } => list(app, room.as_deref(), client.as_deref(), status, opts),
        ReservationCommand::Show { reservation } => show(app, &reservation, opts),
        ReservationCommand::Add {
            room,
            client,
            arrival,
            departure,
            party_size,
            status,
            total_price,
            comments,
        } => {
            let room = resolve_room(&app.store, &room)?.clone();
            let client_id = resolve_client(&app.store, &client)?.id;

            // Derived unless the operator typed a price explicitly
            let total_price =
                total_price.unwrap_or_else(|| compute_price(&room, arrival, departure));

            let reservation = ReservationDraft {
                room_id: room.id,
                client_id,
                arrival,
                departure,
                party_size,
                status: status.into(),
                total_price,
                comments,
            }
            .build(Utc::now())?;

            let id = app.store.add_reservation(&app.session, reservation)?;
            app.save()?;

            println!(
                "Booked #{}: room {}, {} to {} ({} night(s)), total {}",
                id.short(),
                room.number,
                arrival,
                departure,
                nights(arrival, departure),
                format_price(total_price, &app.config.currency),
            );
            Ok(())
        }
        ReservationCommand::Update {
            reservation,
            room,
            client,
            arrival,
            departure,
            party_size,
            status,
            total_price,
            comments,
        } => {
            let current = resolve_reservation(&app.store, &reservation)?.clone();

            let new_room_id = match &room {
                Some(query) => Some(resolve_room(&app.store, query)?.id),
                None => None,
            };
            let new_client_id = match &client {
                Some(query) => Some(resolve_client(&app.store, query)?.id),
                None => None,
            };

            // Recompute the derived price when the room or the date range
            // moved, unless the operator overrode it on the command line.
            let dates_or_room_changed =
                new_room_id.is_some() || arrival.is_some() || departure.is_some();
            let total_price = total_price.or_else(|| {
                if !dates_or_room_changed {
                    return None;
                }
                let room_id = new_room_id.unwrap_or(current.room_id);
                let merged_arrival = arrival.unwrap_or(current.arrival);
                let merged_departure = departure.unwrap_or(current.departure);
                match app.store.room(room_id) {
                    Some(room) => Some(compute_price(room, merged_arrival, merged_departure)),
                    None => {
                        // Dangling room reference: keep the stored price
                        eprintln!("Warning: room {} not found, keeping stored price", room_id);
                        None
                    }
                }
            });

            let patch = ReservationPatch {
                room_id: new_room_id,
                client_id: new_client_id,
                arrival,
                departure,
                party_size,
                status: status.map(Into::into),
                total_price,
                comments,
            };

            let updated = app.store.update_reservation(&app.session, current.id, patch)?;
            let summary = format!(
                "{} to {}, total {}",
                updated.arrival,
                updated.departure,
                format_price(updated.total_price, &app.config.currency)
            );
            app.save()?;

            println!("Updated #{}: {}", current.id.short(), summary);
            Ok(())
        }
        ReservationCommand::Rm { reservation } => {
            let id = resolve_reservation(&app.store, &reservation)?.id;

            let removed = app.store.delete_reservation(&app.session, id)?;
            app.save()?;

            println!(
                "Deleted reservation #{} ({} to {})",
                id.short(),
                removed.arrival,
                removed.departure
            );
            Ok(())
        }
    }
}

fn list(
    app: &AppContext,
    room: Option<&str>,
    client: Option<&str>,
    status: Option<crate::args::ReservationStatusArg>,
    opts: &OutputOpts,
) -> Result<()> {
    let room_id = match room {
        Some(query) => Some(resolve_room(&app.store, query)?.id),
        None => None,
    };
    let client_id = match client {
        Some(query) => Some(resolve_client(&app.store, query)?.id),
        None => None,
    };
    let status = status.map(frontdesk_types::ReservationStatus::from);

    let reservations: Vec<&Reservation> = app
        .store
        .reservations()
        .into_iter()
        .filter(|r| room_id.is_none_or(|id| r.room_id == id))
        .filter(|r| client_id.is_none_or(|id| r.client_id == id))
        .filter(|r| status.is_none_or(|s| r.status == s))
        .collect();

    if opts.json() {
        println!("{}", serde_json::to_string_pretty(&reservations)?);
        return Ok(());
    }

    if reservations.is_empty() {
        println!("No reservations");
        return Ok(());
    }

    let rows: Vec<Vec<Cell>> = reservations
        .iter()
        .map(|r| {
            let room = app
                .store
                .room(r.room_id)
                .map(|room| room.number.clone())
                .unwrap_or_else(|| "N/A".to_string());
            let client = app
                .store
                .client(r.client_id)
                .map(|c| c.full_name())
                .unwrap_or_else(|| "N/A".to_string());
            let presentation = reservation_presentation(r.status);

            vec![
                Cell::plain(r.id.short()),
                Cell::plain(room),
                Cell::plain(client),
                Cell::plain(r.arrival.to_string()),
                Cell::plain(r.departure.to_string()),
                Cell::plain(nights(r.arrival, r.departure).to_string()),
                Cell::colored(presentation.label, presentation.color),
                Cell::plain(format_price(r.total_price, &app.config.currency)),
            ]
        })
        .collect();

    println!(
        "{}",
        render_table(
            &["ID", "ROOM", "CLIENT", "ARRIVAL", "DEPARTURE", "NIGHTS", "STATUS", "PRICE"],
            &rows,
            opts.color,
        )
    );
    Ok(())
}

fn show(app: &AppContext, query: &str, opts: &OutputOpts) -> Result<()> {
    let reservation = resolve_reservation(&app.store, query)?;

    if opts.json() {
        println!("{}", serde_json::to_string_pretty(reservation)?);
        return Ok(());
    }

    // Weak references degrade to "N/A" rather than failing
    let room = app
        .store
        .room(reservation.room_id)
        .map(|room| room.number.clone())
        .unwrap_or_else(|| "N/A".to_string());
    let client = app
        .store
        .client(reservation.client_id)
        .map(|c| c.full_name())
        .unwrap_or_else(|| "N/A".to_string());

    println!("Reservation #{} ({})", reservation.id.short(), reservation.id);
    println!("  Room:      {}", room);
    println!("  Client:    {}", client);
    println!("  Arrival:   {}", reservation.arrival);
    println!("  Departure: {}", reservation.departure);
    println!(
        "  Nights:    {}",
        nights(reservation.arrival, reservation.departure)
    );
    println!("  Party:     {}", reservation.party_size);
    println!(
        "  Status:    {}",
        reservation_presentation(reservation.status).label
    );
    println!(
        "  Total:     {}",
        format_price(reservation.total_price, &app.config.currency)
    );
    if let Some(comments) = &reservation.comments {
        println!("  Comments:  {}", comments);
    }
    println!(
        "  Created:   {}",
        reservation.created_at.format("%Y-%m-%d %H:%M")
    );
    Ok(())
}
