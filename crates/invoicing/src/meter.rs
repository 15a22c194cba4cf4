//! Electricity meter arithmetic for invoice creation and editing.
//!
//! All functions are pure: callers fetch a fresh `(contract, history)`
//! snapshot before each computation, so there is no cached reading to go
//! stale. Readings are absolute kWh counter values; invoices store only the
//! per-period delta.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rentroll_core::InvoiceId;
use rentroll_tenancy::Contract;

use crate::invoice::{Invoice, chronological};

pub type BillingResult<T> = Result<T, BillingError>;

/// Meter computation failure. Always recoverable at the call site:
/// re-prompt on a rejected reading, degrade on a missing invoice.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BillingError {
    /// The entered reading is below the derived baseline. The caller must
    /// re-prompt; the value is never clamped or silently corrected.
    #[error("current reading must be >= previous reading ({current} < {previous})")]
    CurrentBelowPrevious { previous: f64, current: f64 },

    /// The invoice being edited is absent from the freshly fetched history
    /// (the fetch raced a delete).
    #[error("invoice {0} not found in contract history")]
    UnknownInvoice(InvoiceId),
}

/// Usage delta and its rounded cost, ready for an invoice payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageCost {
    /// kWh consumed this period (`electricity_num` on the payload).
    pub usage: f64,
    /// Whole VND (`electricity_price` on the payload).
    pub cost: i64,
}

/// Absolute previous/current readings for an invoice's position in history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingWindow {
    pub previous: f64,
    pub current: f64,
}

/// Absolute meter reading at the end of the most recent billing period.
///
/// Folds the usage deltas of the whole history (missing values count as 0)
/// onto the contract's initial reading. An empty history yields the initial
/// reading itself.
pub fn previous_reading(contract: &Contract, history: &[Invoice]) -> f64 {
    let consumed: f64 = chronological(history)
        .iter()
        .map(|inv| inv.electricity_num.unwrap_or(0.0))
        .sum();
    contract.initial_electricity_num + consumed
}

/// Derive usage and cost from an entered meter reading.
///
/// `current` is `None` while the user has not typed a reading yet; that
/// produces `Ok(None)` rather than a fake zero-cost result. A reading below
/// the baseline is rejected so the caller can re-prompt.
pub fn usage_and_cost(
    previous: f64,
    current: Option<f64>,
    unit_price: f64,
) -> BillingResult<Option<UsageCost>> {
    let Some(current) = current else {
        return Ok(None);
    };
    if current < previous {
        return Err(BillingError::CurrentBelowPrevious { previous, current });
    }
    let usage = current - previous;
    Ok(Some(UsageCost {
        usage,
        cost: round_half_up(usage * unit_price),
    }))
}

/// Reconstruct the absolute reading window for an invoice being edited.
///
/// The stored `electricity_num` is a delta, but the edit form shows absolute
/// previous/current readings consistent with the invoice's chronological
/// position — which need not be the latest.
pub fn readings_for_edit(
    contract: &Contract,
    history: &[Invoice],
    target: InvoiceId,
) -> BillingResult<ReadingWindow> {
    let sorted = chronological(history);
    let index = sorted
        .iter()
        .position(|inv| inv.invoice_id == target)
        .ok_or(BillingError::UnknownInvoice(target))?;

    let previous: f64 = contract.initial_electricity_num
        + sorted[..index]
            .iter()
            .map(|inv| inv.electricity_num.unwrap_or(0.0))
            .sum::<f64>();
    let current = previous + sorted[index].electricity_num.unwrap_or(0.0);

    Ok(ReadingWindow { previous, current })
}

/// Round half-up (ties toward +∞), the canonical rounding rule for all
/// electricity costs. Matches the backend's reconciliation arithmetic.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
