use frontdesk_types::{Client, ClientId, ClientPatch, EntityKind, Error, Result};

use crate::session::Session;
use crate::store::HotelStore;

impl HotelStore {
    pub fn add_client(&mut self, _session: &Session, client: Client) -> Result<ClientId> {
        let id = client.id;
        self.clients.insert(id, client);
        Ok(id)
    }

    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.get(&id)
    }

    /// Resolve a user-supplied identifier prefix.
    pub fn find_client(&self, query: &str) -> Option<&Client> {
        self.clients
            .values()
            .find(|c| c.id.to_string().starts_with(query))
    }

    /// All clients, ordered by last then first name.
    pub fn clients(&self) -> Vec<&Client> {
        let mut clients: Vec<&Client> = self.clients.values().collect();
        clients.sort_by(|a, b| {
            (a.last_name.as_str(), a.first_name.as_str())
                .cmp(&(b.last_name.as_str(), b.first_name.as_str()))
        });
        clients
    }

    pub fn update_client(
        &mut self,
        _session: &Session,
        id: ClientId,
        patch: ClientPatch,
    ) -> Result<&Client> {
        let client = self
            .clients
            .get_mut(&id)
            .ok_or_else(|| Error::not_found(EntityKind::Client, id))?;

        if let Some(last_name) = patch.last_name {
            client.last_name = last_name;
        }
        if let Some(first_name) = patch.first_name {
            client.first_name = first_name;
        }
        if let Some(email) = patch.email {
            client.email = email;
        }
        if let Some(phone) = patch.phone {
            client.phone = phone;
        }
        if let Some(street) = patch.street {
            client.street = Some(street);
        }
        if let Some(city) = patch.city {
            client.city = Some(city);
        }
        if let Some(postal_code) = patch.postal_code {
            client.postal_code = Some(postal_code);
        }
        if let Some(country) = patch.country {
            client.country = Some(country);
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            client.date_of_birth = Some(date_of_birth);
        }
        if let Some(document_type) = patch.document_type {
            client.document_type = Some(document_type);
        }
        if let Some(document_number) = patch.document_number {
            client.document_number = Some(document_number);
        }
        Ok(client)
    }

    /// Remove a client.
    ///
    /// Blocked while any reservation still references the client; the
    /// client and its reservations are left untouched on failure.
    pub fn delete_client(&mut self, _session: &Session, id: ClientId) -> Result<Client> {
        if !self.clients.contains_key(&id) {
            return Err(Error::not_found(EntityKind::Client, id));
        }

        let referencing = self.reservations_for_client(id).len();
        if referencing > 0 {
            return Err(Error::Conflict(format!(
                "client {} still has {} reservation(s); delete those first",
                id, referencing
            )));
        }

        Ok(self.clients.remove(&id).expect("presence checked above"))
    }

    /// Case-insensitive substring scan over names, email and phone.
    pub fn search_clients(&self, query: &str) -> Vec<&Client> {
        let needle = query.to_lowercase();
        let mut hits: Vec<&Client> = self
            .clients
            .values()
            .filter(|c| {
                c.last_name.to_lowercase().contains(&needle)
                    || c.first_name.to_lowercase().contains(&needle)
                    || c.email.to_lowercase().contains(&needle)
                    || c.phone.contains(query)
            })
            .collect();
        hits.sort_by(|a, b| a.last_name.cmp(&b.last_name));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{ClientDraft, ReservationDraft, RoomDraft};
    use chrono::Utc;
    use frontdesk_types::{ReservationStatus, RoomType};

    fn session() -> Session {
        Session::new("test")
    }

    fn client(last: &str, first: &str, email: &str) -> Client {
        ClientDraft::new(last, first, email, "0601020304")
            .build(Utc::now())
            .unwrap()
    }

    #[test]
    fn test_clients_ordered_by_name() {
        let mut store = HotelStore::new();
        store.add_client(&session(), client("Martin", "Zoe", "z@x.fr")).unwrap();
        store.add_client(&session(), client("Bernard", "Al", "a@x.fr")).unwrap();
        store.add_client(&session(), client("Martin", "Ana", "m@x.fr")).unwrap();

        let names: Vec<String> = store.clients().iter().map(|c| c.full_name()).collect();
        assert_eq!(names, vec!["Al Bernard", "Ana Martin", "Zoe Martin"]);
    }

    #[test]
    fn test_update_patches_only_present_fields() {
        let mut store = HotelStore::new();
        let id = store
            .add_client(&session(), client("Martin", "Sophie", "s@x.fr"))
            .unwrap();

        let patch = ClientPatch {
            city: Some("Lyon".to_string()),
            ..Default::default()
        };
        store.update_client(&session(), id, patch).unwrap();

        let c = store.client(id).unwrap();
        assert_eq!(c.city.as_deref(), Some("Lyon"));
        assert_eq!(c.email, "s@x.fr");
    }

    #[test]
    fn test_delete_client_without_reservations_succeeds() {
        let mut store = HotelStore::new();
        let id = store
            .add_client(&session(), client("Martin", "Sophie", "s@x.fr"))
            .unwrap();

        store.delete_client(&session(), id).unwrap();
        assert!(store.client(id).is_none());
    }

    #[test]
    fn test_delete_referenced_client_is_conflict_and_leaves_state() {
        let mut store = HotelStore::new();
        let room = RoomDraft::new("101", RoomType::Double, 100.0).build().unwrap();
        let room_id = store.add_room(&session(), room).unwrap();
        let client_id = store
            .add_client(&session(), client("Martin", "Sophie", "s@x.fr"))
            .unwrap();

        let reservation = ReservationDraft {
            room_id,
            client_id,
            arrival: "2024-03-10".parse().unwrap(),
            departure: "2024-03-13".parse().unwrap(),
            party_size: 2,
            status: ReservationStatus::Confirmed,
            total_price: 300.0,
            comments: None,
        }
        .build(Utc::now())
        .unwrap();
        let reservation_id = store.add_reservation(&session(), reservation).unwrap();

        let err = store.delete_client(&session(), client_id);
        assert!(matches!(err, Err(Error::Conflict(_))));

        // Nothing was removed
        assert!(store.client(client_id).is_some());
        assert!(store.reservation(reservation_id).is_some());
    }

    #[test]
    fn test_delete_missing_client_is_not_found() {
        let mut store = HotelStore::new();
        let err = store.delete_client(&session(), ClientId::new());
        assert!(matches!(err, Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_search_clients_case_insensitive() {
        let mut store = HotelStore::new();
        store
            .add_client(&session(), client("Durand", "Sophie", "sophie@mail.fr"))
            .unwrap();
        store
            .add_client(&session(), client("Petit", "Marc", "marc@mail.fr"))
            .unwrap();

        assert_eq!(store.search_clients("DURAND").len(), 1);
        assert_eq!(store.search_clients("mail.fr").len(), 2);
        assert!(store.search_clients("nobody").is_empty());
    }
}
