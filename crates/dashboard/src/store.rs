//! Collaborator contracts for the backend stores, consumer-side.
//!
//! Implementations re-fetch authoritative state before every computation;
//! there is no optimistic-lock token, so two concurrent edits on one
//! contract race last-write-wins at the backend. That is an accepted
//! limitation of the product, not something this layer resolves.

use async_trait::async_trait;
use thiserror::Error;

use rentroll_core::{ContractId, InvoiceId};
use rentroll_invoicing::{Invoice, InvoicePayload, InvoiceUpdate};
use rentroll_tenancy::Contract;

/// Store-level failure, already stripped of transport details.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,

    #[error("backend error: {0}")]
    Backend(String),
}

/// Read access to tenancy contracts.
#[async_trait]
pub trait ContractStore: Send + Sync {
    async fn active_contracts(&self) -> Result<Vec<Contract>, StoreError>;

    async fn contract(&self, rr_id: ContractId) -> Result<Contract, StoreError>;
}

/// Read/write access to invoices.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Full history for one contract, unsorted; callers sort chronologically.
    async fn invoices_for_contract(&self, rr_id: ContractId) -> Result<Vec<Invoice>, StoreError>;

    async fn invoice(&self, invoice_id: InvoiceId) -> Result<Invoice, StoreError>;

    async fn create_invoice(&self, payload: &InvoicePayload) -> Result<Invoice, StoreError>;

    async fn update_invoice(
        &self,
        invoice_id: InvoiceId,
        update: &InvoiceUpdate,
    ) -> Result<Invoice, StoreError>;
}
