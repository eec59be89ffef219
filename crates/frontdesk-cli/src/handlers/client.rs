use anyhow::Result;
use chrono::Utc;

use frontdesk_engine::reservation_presentation;
use frontdesk_store::ClientDraft;
use frontdesk_types::{Client, ClientPatch};

use super::resolve_client;
use crate::args::ClientCommand;
use crate::context::AppContext;
use crate::output::style::OutputOpts;
use crate::output::table::{Cell, render_table};

pub fn handle(app: &mut AppContext, command: ClientCommand, opts: &OutputOpts) -> Result<()> {
    match command {
        ClientCommand::List { search } => list(app, search.as_deref(), opts),
        ClientCommand::Show { client } => show(app, &client, opts),
        ClientCommand::Add {
            last_name,
            first_name,
            email,
            phone,
            street,
            city,
            postal_code,
            country,
            date_of_birth,
            document_type,
            document_number,
        } => {
            let mut draft = ClientDraft::new(last_name, first_name, email, phone);
            draft.street = street;
            draft.city = city;
            draft.postal_code = postal_code;
            draft.country = country;
            draft.date_of_birth = date_of_birth;
            draft.document_type = document_type;
            draft.document_number = document_number;

            let client = draft.build(Utc::now())?;
            let name = client.full_name();
            let id = app.store.add_client(&app.session, client)?;
            app.save()?;

            println!("Created client {} ({})", name, id);
            Ok(())
        }
        ClientCommand::Update {
            client,
            last_name,
            first_name,
            email,
            phone,
            street,
            city,
            postal_code,
            country,
            date_of_birth,
            document_type,
            document_number,
        } => {
            let id = resolve_client(&app.store, &client)?.id;
            let patch = ClientPatch {
                last_name,
                first_name,
                email,
                phone,
                street,
                city,
                postal_code,
                country,
                date_of_birth,
                document_type,
                document_number,
            };

            let updated = app.store.update_client(&app.session, id, patch)?;
            let name = updated.full_name();
            app.save()?;

            println!("Updated client {} ({})", name, id);
            Ok(())
        }
        ClientCommand::Rm { client } => {
            let id = resolve_client(&app.store, &client)?.id;

            let removed = app.store.delete_client(&app.session, id)?;
            app.save()?;

            println!("Deleted client {} ({})", removed.full_name(), id);
            Ok(())
        }
    }
}

fn list(app: &AppContext, search: Option<&str>, opts: &OutputOpts) -> Result<()> {
    let clients = match search {
        Some(query) => app.store.search_clients(query),
        None => app.store.clients(),
    };

    if opts.json() {
        println!("{}", serde_json::to_string_pretty(&clients)?);
        return Ok(());
    }

    if clients.is_empty() {
        println!("No clients");
        return Ok(());
    }

    let rows: Vec<Vec<Cell>> = clients
        .iter()
        .map(|client| {
            let reservations = app.store.reservations_for_client(client.id).len();
            vec![
                Cell::plain(client.id.short()),
                Cell::plain(client.full_name()),
                Cell::plain(client.email.clone()),
                Cell::plain(client.phone.clone()),
                Cell::plain(client.city.as_deref().unwrap_or("")),
                Cell::plain(reservations.to_string()),
            ]
        })
        .collect();

    println!(
        "{}",
        render_table(
            &["ID", "NAME", "EMAIL", "PHONE", "CITY", "STAYS"],
            &rows,
            opts.color,
        )
    );
    Ok(())
}

fn show(app: &AppContext, query: &str, opts: &OutputOpts) -> Result<()> {
    let client = resolve_client(&app.store, query)?;

    if opts.json() {
        println!("{}", serde_json::to_string_pretty(client)?);
        return Ok(());
    }

    print_client(client);

    let stays = app.store.reservations_for_client(client.id);
    if stays.is_empty() {
        println!("  No reservations");
    } else {
        println!("  Reservations:");
        for r in stays {
            let room = app
                .store
                .room(r.room_id)
                .map(|room| room.number.clone())
                .unwrap_or_else(|| "N/A".to_string());
            println!(
                "    #{}  room {}  {} to {}  {}",
                r.id.short(),
                room,
                r.arrival,
                r.departure,
                reservation_presentation(r.status).label,
            );
        }
    }
    Ok(())
}

fn print_client(client: &Client) {
    println!("Client {} ({})", client.full_name(), client.id);
    println!("  Email:   {}", client.email);
    println!("  Phone:   {}", client.phone);
    if let Some(street) = &client.street {
        println!("  Street:  {}", street);
    }
    if let Some(city) = &client.city {
        println!("  City:    {}", city);
    }
    if let Some(postal_code) = &client.postal_code {
        println!("  Postal:  {}", postal_code);
    }
    if let Some(country) = &client.country {
        println!("  Country: {}", country);
    }
    if let Some(date_of_birth) = client.date_of_birth {
        println!("  Born:    {}", date_of_birth);
    }
    if let (Some(doc_type), Some(doc_number)) = (&client.document_type, &client.document_number) {
        println!("  Document: {} {}", doc_type, doc_number);
    }
    println!("  Since:   {}", client.created_at.format("%Y-%m-%d"));
}
