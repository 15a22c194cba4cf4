//! `rentroll-client` — typed service wrappers over the backend REST API.
//!
//! One [`ApiClient`] per backend; each service surface lives in its own
//! module the way the pages consume them (auth, contracts, invoices,
//! housing, reports, ai). The client also implements the dashboard's store
//! traits, so workflows run against it unchanged from their tests.

pub mod ai;
pub mod auth;
pub mod contracts;
pub mod error;
pub mod housing;
pub mod http;
pub mod invoices;
pub mod reports;
pub mod stores;

pub use auth::{NewUser, PasswordChange, ProfileUpdate, TokenResponse};
pub use error::ApiError;
pub use http::{Acknowledgement, ApiClient};
pub use reports::{
    AvailableRoom, DetailedReport, ExpiringContract, ExpiringContracts, ReportKind, RevenueStats,
    RoomSearch, RoomSearchFilters, SystemOverview,
};
