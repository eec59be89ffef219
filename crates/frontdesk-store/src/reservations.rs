use frontdesk_types::{
    ClientId, EntityKind, Error, Reservation, ReservationId, ReservationPatch, Result, RoomId,
};

use crate::session::Session;
use crate::store::HotelStore;

impl HotelStore {
    /// Insert a built reservation.
    ///
    /// Overlapping stays for the same room are accepted: the availability
    /// engine reports double-bookings, it does not prevent them.
    pub fn add_reservation(
        &mut self,
        _session: &Session,
        reservation: Reservation,
    ) -> Result<ReservationId> {
        let id = reservation.id;
        let room_id = reservation.room_id;
        let arrival = reservation.arrival;

        self.reservations.insert(id, reservation);
        self.index_insert(room_id, arrival, id);
        Ok(id)
    }

    pub fn reservation(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.get(&id)
    }

    /// Resolve a user-supplied identifier prefix.
    pub fn find_reservation(&self, query: &str) -> Option<&Reservation> {
        self.reservations
            .values()
            .find(|r| r.id.to_string().starts_with(query))
    }

    /// All reservations, ordered by arrival date.
    pub fn reservations(&self) -> Vec<&Reservation> {
        let mut reservations: Vec<&Reservation> = self.reservations.values().collect();
        reservations.sort_by_key(|r| (r.arrival, r.id));
        reservations
    }

    /// Reservations for one room, in `(arrival, id)` order (index-backed).
    pub fn reservations_for_room(&self, room_id: RoomId) -> Vec<&Reservation> {
        self.by_room
            .get(&room_id)
            .map(|slot| {
                slot.iter()
                    .map(|(_, id)| &self.reservations[id])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Reservations referencing one client (linear scan), in arrival order.
    pub fn reservations_for_client(&self, client_id: ClientId) -> Vec<&Reservation> {
        let mut hits: Vec<&Reservation> = self
            .reservations
            .values()
            .filter(|r| r.client_id == client_id)
            .collect();
        hits.sort_by_key(|r| (r.arrival, r.id));
        hits
    }

    pub fn update_reservation(
        &mut self,
        _session: &Session,
        id: ReservationId,
        patch: ReservationPatch,
    ) -> Result<&Reservation> {
        if !self.reservations.contains_key(&id) {
            return Err(Error::not_found(EntityKind::Reservation, id));
        }

        // Date-order check against the merged (patched) range
        let current = &self.reservations[&id];
        let arrival = patch.arrival.unwrap_or(current.arrival);
        let departure = patch.departure.unwrap_or(current.departure);
        if departure <= arrival {
            return Err(Error::Validation(format!(
                "departure {} must be after arrival {}",
                departure, arrival
            )));
        }
        if let Some(party_size) = patch.party_size {
            if party_size == 0 {
                return Err(Error::Validation(
                    "party size must be at least 1".to_string(),
                ));
            }
        }
        if let Some(price) = patch.total_price {
            if price < 0.0 || !price.is_finite() {
                return Err(Error::Validation(format!(
                    "total price must be non-negative, got {}",
                    price
                )));
            }
        }

        let old_room = current.room_id;
        let reindex = patch.room_id.is_some() || patch.arrival.is_some();

        let reservation = self
            .reservations
            .get_mut(&id)
            .expect("presence checked above");
        if let Some(room_id) = patch.room_id {
            reservation.room_id = room_id;
        }
        if let Some(client_id) = patch.client_id {
            reservation.client_id = client_id;
        }
        reservation.arrival = arrival;
        reservation.departure = departure;
        if let Some(party_size) = patch.party_size {
            reservation.party_size = party_size;
        }
        if let Some(status) = patch.status {
            reservation.status = status;
        }
        if let Some(price) = patch.total_price {
            reservation.total_price = price;
        }
        if let Some(comments) = patch.comments {
            reservation.comments = Some(comments);
        }
        let new_room = reservation.room_id;

        if reindex {
            self.index_remove(old_room, id);
            self.index_insert(new_room, arrival, id);
        }
        Ok(&self.reservations[&id])
    }

    pub fn delete_reservation(
        &mut self,
        _session: &Session,
        id: ReservationId,
    ) -> Result<Reservation> {
        let reservation = self
            .reservations
            .remove(&id)
            .ok_or_else(|| Error::not_found(EntityKind::Reservation, id))?;
        self.index_remove(reservation.room_id, id);
        Ok(reservation)
    }
}
