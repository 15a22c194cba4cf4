//! `rentroll-housing` — house and room directory projections.
//!
//! Read-only views of the backend's `houses`/`rooms` tables plus the form
//! payloads used to create and update them.

pub mod house;
pub mod room;

pub use house::{House, HouseUpdate, NewHouse};
pub use room::{NewRoom, Room, RoomUpdate};
