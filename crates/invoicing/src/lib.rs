//! `rentroll-invoicing` — invoice projections and the electricity meter math.
//!
//! The backend stores `electricity_num` on each invoice as the kWh
//! **consumed during that billing period** (a delta). Absolute meter
//! readings are never persisted; [`meter`] derives them from the contract's
//! initial reading plus the chronological sum of deltas. Every UI surface
//! totals an invoice through [`ChargeBreakdown`] so list, detail, and export
//! views cannot drift apart.

pub mod invoice;
pub mod meter;

pub use invoice::{ChargeBreakdown, Invoice, InvoicePayload, InvoiceUpdate, chronological};
pub use meter::{
    BillingError, BillingResult, ReadingWindow, UsageCost, previous_reading, readings_for_edit,
    usage_and_cost,
};
