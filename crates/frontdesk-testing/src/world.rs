use chrono::{DateTime, NaiveDate, Utc};

use frontdesk_store::{ClientDraft, HotelStore, ReservationDraft, RoomDraft, Session};
use frontdesk_types::{ClientId, ReservationId, ReservationStatus, Room, RoomId, RoomType};

/// A small hotel with a known floor plan, for tests.
///
/// Rooms: 101 (Double, 100/night), 102 (Twin, 90/night),
/// 201 (Suite, 250/night).  Clients: Sophie Martin, Marc Petit.
/// No reservations until a test books some.
pub struct SampleHotel {
    pub store: HotelStore,
    pub session: Session,
}

impl Default for SampleHotel {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleHotel {
    pub fn new() -> Self {
        let session = Session::new("fixture");
        let mut store = HotelStore::new();

        for (number, room_type, price) in [
            ("101", RoomType::Double, 100.0),
            ("102", RoomType::Twin, 90.0),
            ("201", RoomType::Suite, 250.0),
        ] {
            let room = RoomDraft::new(number, room_type, price)
                .build()
                .expect("fixture room is valid");
            store.add_room(&session, room).expect("fixture room inserts");
        }

        for (last, first, email, phone) in [
            ("Martin", "Sophie", "sophie.martin@example.com", "0601020304"),
            ("Petit", "Marc", "marc.petit@example.com", "0605060708"),
        ] {
            let client = ClientDraft::new(last, first, email, phone)
                .build(Self::fixed_now())
                .expect("fixture client is valid");
            store
                .add_client(&session, client)
                .expect("fixture client inserts");
        }

        Self { store, session }
    }

    /// A fixed timestamp so fixture data is reproducible.
    pub fn fixed_now() -> DateTime<Utc> {
        "2024-03-01T09:00:00Z".parse().expect("valid timestamp")
    }

    pub fn room(&self, number: &str) -> &Room {
        self.store
            .room_by_number(number)
            .expect("fixture room exists")
    }

    pub fn room_id(&self, number: &str) -> RoomId {
        self.room(number).id
    }

    pub fn client_id(&self, last_name: &str) -> ClientId {
        self.store
            .clients()
            .into_iter()
            .find(|c| c.last_name == last_name)
            .expect("fixture client exists")
            .id
    }

    /// Book a confirmed stay in `number` for the first fixture client,
    /// priced at the room's nightly rate times the night count.
    pub fn book(&mut self, number: &str, arrival: &str, departure: &str) -> ReservationId {
        let room = self.room(number);
        let room_id = room.id;
        let arrival: NaiveDate = arrival.parse().expect("valid arrival date");
        let departure: NaiveDate = departure.parse().expect("valid departure date");
        let total_price = (departure - arrival).num_days().max(1) as f64 * room.price_per_night;

        let reservation = ReservationDraft {
            room_id,
            client_id: self.client_id("Martin"),
            arrival,
            departure,
            party_size: 2,
            status: ReservationStatus::Confirmed,
            total_price,
            comments: None,
        }
        .build(Self::fixed_now())
        .expect("fixture reservation is valid");

        self.store
            .add_reservation(&self.session, reservation)
            .expect("fixture reservation inserts")
    }
}
