//! Draft types: explicit, validated builders for new entities.
//!
//! A draft carries exactly the fields an entity can be created with.  Its
//! `build` method runs the required-field checks and, on success, mints the
//! identifier (and creation timestamp where the model has one).  Nothing
//! reaches the store without passing through here.

use chrono::{DateTime, NaiveDate, Utc};
use frontdesk_types::{
    Client, ClientId, Error, Reservation, ReservationId, ReservationStatus, Result, Room, RoomId,
    RoomStatus, RoomType,
};

/// Draft for a new room
#[derive(Debug, Clone)]
pub struct RoomDraft {
    pub number: String,
    pub room_type: RoomType,
    pub floor: i32,
    pub price_per_night: f64,
    pub capacity: u32,
    pub status: RoomStatus,
    pub features: Vec<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl RoomDraft {
    pub fn new(number: impl Into<String>, room_type: RoomType, price_per_night: f64) -> Self {
        Self {
            number: number.into(),
            room_type,
            floor: 0,
            price_per_night,
            capacity: 1,
            status: RoomStatus::Available,
            features: Vec::new(),
            description: None,
            image: None,
        }
    }

    pub fn build(self) -> Result<Room> {
        if self.number.trim().is_empty() {
            return Err(Error::Validation("room number is required".to_string()));
        }
        if self.price_per_night < 0.0 || !self.price_per_night.is_finite() {
            return Err(Error::Validation(format!(
                "nightly price must be non-negative, got {}",
                self.price_per_night
            )));
        }
        if self.capacity == 0 {
            return Err(Error::Validation("capacity must be at least 1".to_string()));
        }

        Ok(Room {
            id: RoomId::new(),
            number: self.number.trim().to_string(),
            room_type: self.room_type,
            floor: self.floor,
            price_per_night: self.price_per_night,
            capacity: self.capacity,
            status: self.status,
            features: self.features,
            description: self.description,
            image: self.image,
        })
    }
}

/// Draft for a new client
#[derive(Debug, Clone)]
pub struct ClientDraft {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
}

impl ClientDraft {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            email: email.into(),
            phone: phone.into(),
            street: None,
            city: None,
            postal_code: None,
            country: None,
            date_of_birth: None,
            document_type: None,
            document_number: None,
        }
    }

    pub fn build(self, now: DateTime<Utc>) -> Result<Client> {
        for (field, value) in [
            ("last name", &self.last_name),
            ("first name", &self.first_name),
            ("email", &self.email),
            ("phone", &self.phone),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!("{} is required", field)));
            }
        }
        // Minimal shape check, matching the reference's loose validation
        if !self.email.contains('@') {
            return Err(Error::Validation(format!(
                "email does not look valid: {}",
                self.email
            )));
        }

        Ok(Client {
            id: ClientId::new(),
            last_name: self.last_name.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            street: self.street,
            city: self.city,
            postal_code: self.postal_code,
            country: self.country,
            date_of_birth: self.date_of_birth,
            document_type: self.document_type,
            document_number: self.document_number,
            created_at: now,
        })
    }
}

/// Draft for a new reservation.
///
/// `total_price` is supplied by the caller: the pricing calculator derives
/// it from the room and date range, and a manual override simply arrives
/// here as a different number.
#[derive(Debug, Clone)]
pub struct ReservationDraft {
    pub room_id: RoomId,
    pub client_id: ClientId,
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
    pub party_size: u32,
    pub status: ReservationStatus,
    pub total_price: f64,
    pub comments: Option<String>,
}

impl ReservationDraft {
    pub fn build(self, now: DateTime<Utc>) -> Result<Reservation> {
        if self.departure <= self.arrival {
            return Err(Error::Validation(format!(
                "departure {} must be after arrival {}",
                self.departure, self.arrival
            )));
        }
        if self.party_size == 0 {
            return Err(Error::Validation(
                "party size must be at least 1".to_string(),
            ));
        }
        if self.total_price < 0.0 || !self.total_price.is_finite() {
            return Err(Error::Validation(format!(
                "total price must be non-negative, got {}",
                self.total_price
            )));
        }

        Ok(Reservation {
            id: ReservationId::new(),
            room_id: self.room_id,
            client_id: self.client_id,
            arrival: self.arrival,
            departure: self.departure,
            party_size: self.party_size,
            status: self.status,
            total_price: self.total_price,
            comments: self.comments,
            created_at: now,
        })
    }
}
