use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use frontdesk_store::HotelStore;
use frontdesk_types::{Client, Reservation, Room};

/// Plain-entity snapshot of the store, as written to `hotel.json`.
///
/// The store itself is memory-only; this file is the CLI's way of carrying
/// its dataset from one invocation to the next.  It sits entirely behind
/// the store interface: nothing in the core knows it exists.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub rooms: Vec<Room>,

    #[serde(default)]
    pub clients: Vec<Client>,

    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

impl Snapshot {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading dataset {}", path.display()))?;
        let snapshot: Snapshot = serde_json::from_str(&content)
            .with_context(|| format!("parsing dataset {}", path.display()))?;
        Ok(snapshot)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("writing dataset {}", path.display()))?;
        Ok(())
    }

    pub fn into_store(self) -> HotelStore {
        HotelStore::from_entities(self.rooms, self.clients, self.reservations)
    }

    pub fn from_store(store: &HotelStore) -> Self {
        Self {
            rooms: store.rooms().into_iter().cloned().collect(),
            clients: store.clients().into_iter().cloned().collect(),
            reservations: store.reservations().into_iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdesk_testing::SampleHotel;
    use tempfile::TempDir;

    #[test]
    fn test_snapshot_roundtrip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("hotel.json");

        let mut hotel = SampleHotel::new();
        let stay = hotel.book("101", "2024-03-10", "2024-03-13");

        Snapshot::from_store(&hotel.store).save_to(&path)?;
        let restored = Snapshot::load_from(&path)?.into_store();

        assert_eq!(restored.rooms().len(), hotel.store.rooms().len());
        assert!(restored.reservation(stay).is_some());

        // The index is rebuilt on load
        let room = hotel.room_id("101");
        assert_eq!(restored.reservations_for_room(room).len(), 1);
        Ok(())
    }

    #[test]
    fn test_missing_snapshot_is_empty() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let snapshot = Snapshot::load_from(&temp_dir.path().join("hotel.json"))?;
        assert!(snapshot.into_store().is_empty());
        Ok(())
    }
}
