use chrono::{Days, NaiveDate, Utc};

use frontdesk_engine::compute_price;
use frontdesk_store::{ClientDraft, HotelStore, ReservationDraft, RoomDraft, Session};
use frontdesk_types::{ClientId, ReservationStatus, RoomType};

use crate::state::Snapshot;

/// Build the demo dataset seeded by `frontdesk init --sample`.
///
/// Stays are placed relative to `today` so the default calendar view has
/// something to show: one stay in progress, upcoming ones, a completed one
/// in the last week and a cancellation.
pub fn sample_snapshot(today: NaiveDate) -> Snapshot {
    let session = Session::new("init");
    let mut store = HotelStore::new();

    let rooms = [
        ("101", RoomType::Simple, 1, 75.0, 1, vec!["Courtyard view"]),
        ("102", RoomType::Double, 1, 100.0, 2, vec!["Street view"]),
        ("103", RoomType::Double, 1, 100.0, 2, vec![]),
        ("201", RoomType::Twin, 2, 90.0, 2, vec!["Street view"]),
        ("202", RoomType::Suite, 2, 250.0, 4, vec!["Sea view", "Balcony"]),
        ("301", RoomType::Family, 3, 180.0, 5, vec!["Sea view"]),
    ];
    for (number, room_type, floor, price, capacity, features) in rooms {
        let mut draft = RoomDraft::new(number, room_type, price);
        draft.floor = floor;
        draft.capacity = capacity;
        draft.features = features.into_iter().map(String::from).collect();
        let room = draft.build().expect("sample room is valid");
        store.add_room(&session, room).expect("sample room inserts");
    }

    let clients = [
        ("Martin", "Sophie", "sophie.martin@example.com", "0601020304", Some("Lyon")),
        ("Petit", "Marc", "marc.petit@example.com", "0605060708", Some("Paris")),
        ("Schneider", "Julia", "julia.schneider@example.com", "0612131415", None),
    ];
    let mut client_ids = Vec::new();
    for (last, first, email, phone, city) in clients {
        let mut draft = ClientDraft::new(last, first, email, phone);
        draft.city = city.map(String::from);
        let client = draft.build(Utc::now()).expect("sample client is valid");
        let id = store
            .add_client(&session, client)
            .expect("sample client inserts");
        client_ids.push(id);
    }

    let stays: [(&str, usize, i64, u64, u32, ReservationStatus); 5] = [
        // (room, client idx, start offset from today, nights, party, status)
        ("102", 0, -1, 3, 2, ReservationStatus::Confirmed),
        ("201", 1, 1, 3, 2, ReservationStatus::Pending),
        ("101", 2, -7, 3, 1, ReservationStatus::Completed),
        ("202", 0, 3, 5, 2, ReservationStatus::Confirmed),
        ("103", 1, 0, 1, 2, ReservationStatus::Cancelled),
    ];
    for (number, client_idx, start_offset, nights, party_size, status) in stays {
        book(
            &mut store,
            &session,
            number,
            client_ids[client_idx],
            offset(today, start_offset),
            nights,
            party_size,
            status,
        );
    }

    Snapshot::from_store(&store)
}

fn offset(today: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        today + Days::new(days as u64)
    } else {
        today - Days::new(days.unsigned_abs())
    }
}

#[allow(clippy::too_many_arguments)]
fn book(
    store: &mut HotelStore,
    session: &Session,
    number: &str,
    client_id: ClientId,
    arrival: NaiveDate,
    nights: u64,
    party_size: u32,
    status: ReservationStatus,
) {
    let room = store
        .room_by_number(number)
        .expect("sample room exists")
        .clone();
    let departure = arrival + Days::new(nights);

    let reservation = ReservationDraft {
        room_id: room.id,
        client_id,
        arrival,
        departure,
        party_size,
        status,
        total_price: compute_price(&room, arrival, departure),
        comments: None,
    }
    .build(Utc::now())
    .expect("sample reservation is valid");

    store
        .add_reservation(session, reservation)
        .expect("sample reservation inserts");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_snapshot_is_consistent() {
        let today: NaiveDate = "2024-03-13".parse().unwrap();
        let snapshot = sample_snapshot(today);

        assert_eq!(snapshot.rooms.len(), 6);
        assert_eq!(snapshot.clients.len(), 3);
        assert_eq!(snapshot.reservations.len(), 5);

        // Every reservation resolves and is priced from its room
        for r in &snapshot.reservations {
            let room = snapshot.rooms.iter().find(|room| room.id == r.room_id);
            assert!(room.is_some());
            assert!(snapshot.clients.iter().any(|c| c.id == r.client_id));
            assert!(r.total_price > 0.0);
        }
    }

    #[test]
    fn test_sample_has_a_stay_covering_today() {
        let today: NaiveDate = "2024-03-13".parse().unwrap();
        let store = sample_snapshot(today).into_store();

        let covering = store
            .reservations()
            .iter()
            .filter(|r| r.occupies(today))
            .count();
        assert!(covering >= 1);
    }
}
