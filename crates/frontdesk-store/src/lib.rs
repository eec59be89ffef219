//! # frontdesk-store
//!
//! The in-memory system of record for a single hotel: rooms, clients and
//! reservations, held in mapping-backed collections for the lifetime of the
//! process.  The crate exposes a synchronous [`HotelStore`] with typed CRUD
//! helpers for every domain model, draft types that validate input before
//! anything is committed, and a room → reservations index that keeps
//! calendar queries sub-linear in total reservation count.
//!
//! Persistence is deliberately absent.  A durable deployment adds a storage
//! layer behind this interface without changing any of the contracts.

pub mod clients;
pub mod draft;
pub mod reservations;
pub mod rooms;
pub mod session;
pub mod store;

pub use draft::{ClientDraft, ReservationDraft, RoomDraft};
pub use session::Session;
pub use store::HotelStore;
