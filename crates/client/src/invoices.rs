//! Invoice endpoints (`/invoices/*`).

use rentroll_core::{ContractId, InvoiceId};
use rentroll_invoicing::{Invoice, InvoicePayload, InvoiceUpdate};

use crate::error::ApiError;
use crate::http::{Acknowledgement, ApiClient};

impl ApiClient {
    pub async fn invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        self.get_json("invoices/").await
    }

    /// Full, unsorted history for one contract; chronology is derived
    /// client-side from `(due_date, created_at)`.
    pub async fn invoices_by_contract(
        &self,
        rr_id: ContractId,
    ) -> Result<Vec<Invoice>, ApiError> {
        self.get_json(&format!("invoices/rented-room/{rr_id}")).await
    }

    pub async fn pending_invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        self.get_json("invoices/pending").await
    }

    pub async fn invoice(&self, invoice_id: InvoiceId) -> Result<Invoice, ApiError> {
        self.get_json(&format!("invoices/{invoice_id}")).await
    }

    pub async fn create_invoice(&self, payload: &InvoicePayload) -> Result<Invoice, ApiError> {
        self.post_json("invoices/", payload).await
    }

    pub async fn update_invoice(
        &self,
        invoice_id: InvoiceId,
        update: &InvoiceUpdate,
    ) -> Result<Invoice, ApiError> {
        self.put_json(&format!("invoices/{invoice_id}"), update).await
    }

    pub async fn pay_invoice(&self, invoice_id: InvoiceId) -> Result<Acknowledgement, ApiError> {
        self.post_empty(&format!("invoices/{invoice_id}/pay")).await
    }

    pub async fn delete_invoice(
        &self,
        invoice_id: InvoiceId,
    ) -> Result<Acknowledgement, ApiError> {
        self.delete_json(&format!("invoices/{invoice_id}")).await
    }
}
