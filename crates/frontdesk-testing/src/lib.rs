//! Fixtures for frontdesk tests.
//!
//! Provides a small deterministic hotel (three rooms, two clients, no
//! reservations) plus booking helpers, so engine and CLI tests can set up
//! occupancy scenarios in one line each.

mod world;

pub use world::SampleHotel;
