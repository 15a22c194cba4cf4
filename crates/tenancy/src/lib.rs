//! `rentroll-tenancy` — tenancy contract projections.
//!
//! A contract ("rented room", `rr_id` on the wire) links a tenant to a room
//! with fixed utility unit prices. Contracts are created once, optionally
//! updated, and soft-terminated; invoices reference them by `rr_id`.

pub mod contract;

pub use contract::{Contract, ContractUpdate, NewContract};
