// Types layer - domain schemas shared by the store, the engine and the CLI.
// Schemas only: no storage, no query logic.

pub mod client;
pub mod error;
pub mod ids;
pub mod reservation;
pub mod room;

pub use client::{Client, ClientPatch};
pub use error::{EntityKind, Error, Result};
pub use ids::{ClientId, ReservationId, RoomId};
pub use reservation::{Reservation, ReservationPatch, ReservationStatus};
pub use room::{Room, RoomPatch, RoomStatus, RoomType};
