use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use frontdesk_engine::nights;
use frontdesk_types::Reservation;

use crate::args::{ExportCommand, ExportFormat};
use crate::context::AppContext;

/// Flat, join-resolved reservation row as written to CSV/JSON exports.
#[derive(Debug, Serialize)]
struct ReservationRecord {
    id: String,
    room: String,
    client: String,
    arrival: String,
    departure: String,
    nights: i64,
    party_size: u32,
    status: String,
    total_price: f64,
    created_at: String,
}

impl ReservationRecord {
    fn from_reservation(app: &AppContext, r: &Reservation) -> Self {
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

        Self {
            id: r.id.to_string(),
            room,
            client,
            arrival: r.arrival.to_string(),
            departure: r.departure.to_string(),
            nights: nights(r.arrival, r.departure),
            party_size: r.party_size,
            status: r.status.label().to_string(),
            total_price: r.total_price,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

pub fn handle(app: &AppContext, command: ExportCommand) -> Result<()> {
    match command {
        ExportCommand::Reservations { output, format } => {
            let records: Vec<ReservationRecord> = app
                .store
                .reservations()
                .into_iter()
                .map(|r| ReservationRecord::from_reservation(app, r))
                .collect();

            let count = records.len();
            match format {
                ExportFormat::Csv => write_csv(&records, output.as_ref())?,
                ExportFormat::Json => write_json(&records, output.as_ref())?,
            }

            if let Some(path) = output {
                eprintln!("Exported {} reservation(s) to {}", count, path.display());
            }
            Ok(())
        }
    }
}

fn write_csv(records: &[ReservationRecord], output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            let mut writer = csv::Writer::from_path(path)
                .with_context(|| format!("creating {}", path.display()))?;
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        None => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

fn write_json(records: &[ReservationRecord], output: Option<&PathBuf>) -> Result<()> {
    let content = serde_json::to_string_pretty(records)?;
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
