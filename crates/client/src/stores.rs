//! Dashboard store traits implemented over the REST API.
//!
//! This is the seam the invoice workflows run through: tests drive them
//! with in-memory fakes, the application with this client.

use async_trait::async_trait;

use rentroll_core::{ContractId, InvoiceId};
use rentroll_dashboard::{ContractStore, InvoiceStore, StoreError};
use rentroll_invoicing::{Invoice, InvoicePayload, InvoiceUpdate};
use rentroll_tenancy::Contract;

use crate::http::ApiClient;

#[async_trait]
impl ContractStore for ApiClient {
    async fn active_contracts(&self) -> Result<Vec<Contract>, StoreError> {
        let contracts = self.contracts().await.map_err(StoreError::from)?;
        Ok(contracts.into_iter().filter(|c| c.is_active).collect())
    }

    async fn contract(&self, rr_id: ContractId) -> Result<Contract, StoreError> {
        ApiClient::contract(self, rr_id).await.map_err(StoreError::from)
    }
}

#[async_trait]
impl InvoiceStore for ApiClient {
    async fn invoices_for_contract(&self, rr_id: ContractId) -> Result<Vec<Invoice>, StoreError> {
        self.invoices_by_contract(rr_id).await.map_err(StoreError::from)
    }

    async fn invoice(&self, invoice_id: InvoiceId) -> Result<Invoice, StoreError> {
        ApiClient::invoice(self, invoice_id)
            .await
            .map_err(StoreError::from)
    }

    async fn create_invoice(&self, payload: &InvoicePayload) -> Result<Invoice, StoreError> {
        ApiClient::create_invoice(self, payload)
            .await
            .map_err(StoreError::from)
    }

    async fn update_invoice(
        &self,
        invoice_id: InvoiceId,
        update: &InvoiceUpdate,
    ) -> Result<Invoice, StoreError> {
        ApiClient::update_invoice(self, invoice_id, update)
            .await
            .map_err(StoreError::from)
    }
}
