//! `rentroll-auth` — client-side session and role model.
//!
//! Authentication itself happens at the backend (OAuth2 password flow);
//! this crate holds the resulting bearer token and profile, and gates
//! admin-only surfaces. It is intentionally decoupled from HTTP.

pub mod profile;
pub mod roles;
pub mod session;

pub use profile::{RoleInfo, UserProfile};
pub use roles::Role;
pub use session::{AccessToken, InMemorySessionStore, Session, SessionStore};
