use std::collections::HashMap;

use chrono::NaiveDate;
use frontdesk_types::{Client, ClientId, Reservation, ReservationId, Room, RoomId};

/// In-memory collections for one hotel, plus a secondary index from room
/// to its reservations ordered by `(arrival, id)`.
///
/// All mutation goes through the per-entity modules (`rooms`, `clients`,
/// `reservations`); they keep the index consistent with the primary maps.
#[derive(Debug, Default, Clone)]
pub struct HotelStore {
    pub(crate) rooms: HashMap<RoomId, Room>,
    pub(crate) clients: HashMap<ClientId, Client>,
    pub(crate) reservations: HashMap<ReservationId, Reservation>,

    /// Reservations per room, as `(arrival, id)` pairs kept sorted.
    pub(crate) by_room: HashMap<RoomId, Vec<(NaiveDate, ReservationId)>>,
}

impl HotelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from plain entity lists (e.g. a loaded snapshot).
    pub fn from_entities(
        rooms: Vec<Room>,
        clients: Vec<Client>,
        reservations: Vec<Reservation>,
    ) -> Self {
        let mut store = Self {
            rooms: rooms.into_iter().map(|r| (r.id, r)).collect(),
            clients: clients.into_iter().map(|c| (c.id, c)).collect(),
            reservations: reservations.into_iter().map(|r| (r.id, r)).collect(),
            by_room: HashMap::new(),
        };

        let entries: Vec<(RoomId, NaiveDate, ReservationId)> = store
            .reservations
            .values()
            .map(|r| (r.room_id, r.arrival, r.id))
            .collect();
        for (room_id, arrival, id) in entries {
            store.index_insert(room_id, arrival, id);
        }
        store
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.clients.is_empty() && self.reservations.is_empty()
    }

    // --- secondary index maintenance ---

    pub(crate) fn index_insert(&mut self, room_id: RoomId, arrival: NaiveDate, id: ReservationId) {
        let slot = self.by_room.entry(room_id).or_default();
        let pos = slot
            .binary_search(&(arrival, id))
            .unwrap_or_else(|pos| pos);
        slot.insert(pos, (arrival, id));
    }

    pub(crate) fn index_remove(&mut self, room_id: RoomId, id: ReservationId) {
        if let Some(slot) = self.by_room.get_mut(&room_id) {
            slot.retain(|(_, other)| *other != id);
            if slot.is_empty() {
                self.by_room.remove(&room_id);
            }
        }
    }
}
