use anyhow::Result;
use chrono::Local;
use std::path::Path;

use crate::config::Config;
use crate::sample;
use crate::state::Snapshot;

pub fn handle(data_dir: &Path, seed_sample: bool) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let config_path = data_dir.join("config.toml");
    if config_path.exists() {
        println!("Config already present: {}", config_path.display());
    } else {
        Config::default().save_to(&config_path)?;
        println!("Wrote default config: {}", config_path.display());
    }

    let dataset_path = data_dir.join("hotel.json");
    if seed_sample {
        // Explicit request: overwrite whatever dataset is there
        let snapshot = sample::sample_snapshot(Local::now().date_naive());
        let summary = format!(
            "{} room(s), {} client(s), {} reservation(s)",
            snapshot.rooms.len(),
            snapshot.clients.len(),
            snapshot.reservations.len()
        );
        snapshot.save_to(&dataset_path)?;
        println!("Seeded sample hotel: {}", summary);
    } else if dataset_path.exists() {
        println!("Dataset already present: {}", dataset_path.display());
    } else {
        Snapshot::default().save_to(&dataset_path)?;
        println!("Wrote empty dataset: {}", dataset_path.display());
    }

    println!();
    println!("Next steps:");
    println!("  frontdesk room add 101 --type double --price 100");
    println!("  frontdesk room list");
    println!("  frontdesk calendar");
    Ok(())
}
