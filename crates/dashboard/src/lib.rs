//! `rentroll-dashboard` — UI-facing workflow state for the dashboard.
//!
//! This crate sits between the rendered pages and the backend stores. It
//! owns the invoice create/edit drafts (re-deriving every meter value from
//! a fresh history snapshot rather than caching component state) and the
//! stale-fetch guard used when the user switches contracts quickly. It
//! performs no I/O of its own; the store traits are implemented by the
//! HTTP client crate and by in-memory fakes in tests.

pub mod invoice_form;
pub mod selection;
pub mod store;

pub use invoice_form::{DraftMode, InvoiceDraft, InvoiceWorkflow, WorkflowError};
pub use selection::{ContractSelection, FetchTicket};
pub use store::{ContractStore, InvoiceStore, StoreError};
