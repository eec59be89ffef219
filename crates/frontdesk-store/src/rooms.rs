use frontdesk_types::{EntityKind, Error, Result, Room, RoomId, RoomPatch};

use crate::session::Session;
use crate::store::HotelStore;

impl HotelStore {
    /// Insert a built room.  Fails with Conflict if another room already
    /// carries the same display number.
    pub fn add_room(&mut self, _session: &Session, room: Room) -> Result<RoomId> {
        if let Some(existing) = self.room_by_number(&room.number) {
            return Err(Error::Conflict(format!(
                "room number {} already exists ({})",
                room.number, existing.id
            )));
        }
        let id = room.id;
        self.rooms.insert(id, room);
        Ok(id)
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn room_by_number(&self, number: &str) -> Option<&Room> {
        self.rooms.values().find(|r| r.number == number)
    }

    /// Resolve a user-supplied reference: exact display number first,
    /// then identifier prefix.
    pub fn find_room(&self, query: &str) -> Option<&Room> {
        self.room_by_number(query)
            .or_else(|| self.rooms.values().find(|r| r.id.to_string().starts_with(query)))
    }

    /// All rooms, ordered by display number.
    pub fn rooms(&self) -> Vec<&Room> {
        let mut rooms: Vec<&Room> = self.rooms.values().collect();
        rooms.sort_by(|a, b| a.number.cmp(&b.number));
        rooms
    }

    pub fn update_room(
        &mut self,
        _session: &Session,
        id: RoomId,
        patch: RoomPatch,
    ) -> Result<&Room> {
        if !self.rooms.contains_key(&id) {
            return Err(Error::not_found(EntityKind::Room, id));
        }
        if let Some(number) = &patch.number {
            if let Some(existing) = self.room_by_number(number) {
                if existing.id != id {
                    return Err(Error::Conflict(format!(
                        "room number {} already exists ({})",
                        number, existing.id
                    )));
                }
            }
        }

        let room = self.rooms.get_mut(&id).expect("presence checked above");
        if let Some(number) = patch.number {
            room.number = number;
        }
        if let Some(room_type) = patch.room_type {
            room.room_type = room_type;
        }
        if let Some(floor) = patch.floor {
            room.floor = floor;
        }
        if let Some(price) = patch.price_per_night {
            room.price_per_night = price;
        }
        if let Some(capacity) = patch.capacity {
            room.capacity = capacity;
        }
        if let Some(status) = patch.status {
            room.status = status;
        }
        if let Some(features) = patch.features {
            room.features = features;
        }
        if let Some(description) = patch.description {
            room.description = Some(description);
        }
        if let Some(image) = patch.image {
            room.image = Some(image);
        }
        Ok(self.rooms.get(&id).expect("presence checked above"))
    }

    /// Remove a room.
    ///
    /// Deliberately NOT guarded against referencing reservations; those are
    /// left dangling and readers degrade to "N/A".  Callers who care can
    /// count them first via [`HotelStore::reservations_for_room`].
    pub fn delete_room(&mut self, _session: &Session, id: RoomId) -> Result<Room> {
        self.rooms
            .remove(&id)
            .ok_or_else(|| Error::not_found(EntityKind::Room, id))
    }

    /// Case-insensitive substring scan over number, type and features.
    pub fn search_rooms(&self, query: &str) -> Vec<&Room> {
        let needle = query.to_lowercase();
        let mut hits: Vec<&Room> = self
            .rooms
            .values()
            .filter(|r| {
                r.number.to_lowercase().contains(&needle)
                    || r.room_type.label().to_lowercase().contains(&needle)
                    || r.features.iter().any(|f| f.to_lowercase().contains(&needle))
            })
            .collect();
        hits.sort_by(|a, b| a.number.cmp(&b.number));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::RoomDraft;
    use frontdesk_types::{RoomStatus, RoomType};

    fn session() -> Session {
        Session::new("test")
    }

    fn store_with_rooms() -> HotelStore {
        let mut store = HotelStore::new();
        for (number, price) in [("101", 100.0), ("102", 120.0), ("201", 180.0)] {
            let room = RoomDraft::new(number, RoomType::Double, price).build().unwrap();
            store.add_room(&session(), room).unwrap();
        }
        store
    }

    #[test]
    fn test_add_and_get_room() {
        let store = store_with_rooms();
        let room = store.room_by_number("101").unwrap();
        assert_eq!(store.room(room.id).unwrap().number, "101");
    }

    #[test]
    fn test_rooms_ordered_by_number() {
        let store = store_with_rooms();
        let numbers: Vec<&str> = store.rooms().iter().map(|r| r.number.as_str()).collect();
        assert_eq!(numbers, vec!["101", "102", "201"]);
    }

    #[test]
    fn test_duplicate_number_is_conflict() {
        let mut store = store_with_rooms();
        let dup = RoomDraft::new("101", RoomType::Suite, 300.0).build().unwrap();
        assert!(matches!(
            store.add_room(&session(), dup),
            Err(Error::Conflict(_))
        ));
    }

    #[test]
    fn test_update_patches_only_present_fields() {
        let mut store = store_with_rooms();
        let id = store.room_by_number("101").unwrap().id;

        let patch = RoomPatch {
            status: Some(RoomStatus::Maintenance),
            ..Default::default()
        };
        store.update_room(&session(), id, patch).unwrap();

        let room = store.room(id).unwrap();
        assert_eq!(room.status, RoomStatus::Maintenance);
        // Untouched fields survive
        assert_eq!(room.number, "101");
        assert_eq!(room.price_per_night, 100.0);
    }

    #[test]
    fn test_update_missing_room_is_not_found() {
        let mut store = HotelStore::new();
        let err = store.update_room(&session(), RoomId::new(), RoomPatch::default());
        assert!(matches!(err, Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_update_to_taken_number_is_conflict() {
        let mut store = store_with_rooms();
        let id = store.room_by_number("101").unwrap().id;
        let patch = RoomPatch {
            number: Some("102".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            store.update_room(&session(), id, patch),
            Err(Error::Conflict(_))
        ));
    }

    #[test]
    fn test_delete_room_is_unguarded() {
        let mut store = store_with_rooms();
        let id = store.room_by_number("101").unwrap().id;
        let removed = store.delete_room(&session(), id).unwrap();
        assert_eq!(removed.number, "101");
        assert!(store.room(id).is_none());
    }

    #[test]
    fn test_find_room_by_number_or_id_prefix() {
        let store = store_with_rooms();
        let id = store.room_by_number("201").unwrap().id;

        assert_eq!(store.find_room("201").unwrap().id, id);
        let prefix = &id.to_string()[..8];
        assert_eq!(store.find_room(prefix).unwrap().id, id);
        assert!(store.find_room("does-not-exist").is_none());
    }

    #[test]
    fn test_search_rooms_matches_features() {
        let mut store = store_with_rooms();
        let mut draft = RoomDraft::new("301", RoomType::Suite, 400.0);
        draft.features = vec!["Sea view".to_string(), "Balcony".to_string()];
        store.add_room(&session(), draft.build().unwrap()).unwrap();

        let hits = store.search_rooms("sea");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].number, "301");
    }
}
