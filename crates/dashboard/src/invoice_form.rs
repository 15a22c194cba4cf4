//! Invoice create/edit drafts.
//!
//! The meter baseline is always re-derived from a freshly fetched history
//! snapshot at the moment a form opens. Nothing here caches readings across
//! contract switches; a new draft means a new fetch and a new fold.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::warn;

use rentroll_core::{ContractId, InvoiceId};
use rentroll_invoicing::{
    BillingError, ChargeBreakdown, Invoice, InvoicePayload, InvoiceUpdate, ReadingWindow, meter,
};
use rentroll_tenancy::Contract;

use crate::store::{ContractStore, InvoiceStore, StoreError};

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The draft is missing a required field; submission is withheld.
    #[error("draft incomplete: {0}")]
    Incomplete(&'static str),

    #[error(transparent)]
    Billing(#[from] BillingError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Whether a draft creates a new invoice or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit {
        invoice_id: InvoiceId,
        /// False when the prior reading could not be verified against the
        /// fetched history; the form shows a warning on such rows.
        verified: bool,
    },
}

/// Form state for one invoice, derived from a `(contract, history)` snapshot.
///
/// Plain charge fields are freely editable; the electricity fields are only
/// writable through [`set_current_reading`](Self::set_current_reading) so
/// usage and cost can never drift from the entered reading.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    mode: DraftMode,
    rr_id: ContractId,
    unit_price: f64,
    previous_reading: f64,
    current_reading: Option<f64>,
    electricity_usage: f64,
    electricity_price: i64,
    pub rent: i64,
    pub water_price: i64,
    pub internet_price: i64,
    pub general_price: i64,
    pub due_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
}

impl InvoiceDraft {
    fn create(contract: &Contract, previous_reading: f64) -> Self {
        Self {
            mode: DraftMode::Create,
            rr_id: contract.rr_id,
            unit_price: contract.electricity_unit_price,
            previous_reading,
            current_reading: None,
            electricity_usage: 0.0,
            electricity_price: 0,
            rent: contract.monthly_rent,
            water_price: contract.water_price,
            internet_price: contract.internet_price,
            general_price: contract.general_price,
            due_date: None,
            payment_date: None,
        }
    }

    fn edit(contract: &Contract, invoice: &Invoice, window: ReadingWindow, verified: bool) -> Self {
        Self {
            mode: DraftMode::Edit {
                invoice_id: invoice.invoice_id,
                verified,
            },
            rr_id: contract.rr_id,
            unit_price: contract.electricity_unit_price,
            previous_reading: window.previous,
            current_reading: Some(window.current),
            electricity_usage: invoice.electricity_num.unwrap_or(0.0),
            // Keep the stored cost until the reading is touched; a silent
            // re-price on open would change a historical invoice.
            electricity_price: invoice.electricity_price.unwrap_or(0),
            rent: invoice.price,
            water_price: invoice.water_price.unwrap_or(0),
            internet_price: invoice.internet_price.unwrap_or(0),
            general_price: invoice.general_price.unwrap_or(0),
            due_date: Some(invoice.due_date),
            payment_date: invoice.payment_date,
        }
    }

    pub fn mode(&self) -> DraftMode {
        self.mode
    }

    pub fn contract_id(&self) -> ContractId {
        self.rr_id
    }

    pub fn previous_reading(&self) -> f64 {
        self.previous_reading
    }

    pub fn current_reading(&self) -> Option<f64> {
        self.current_reading
    }

    pub fn electricity_usage(&self) -> f64 {
        self.electricity_usage
    }

    pub fn electricity_price(&self) -> i64 {
        self.electricity_price
    }

    /// Whether the prior reading was verified against fetched history.
    /// Always true for create drafts.
    pub fn is_verified(&self) -> bool {
        match self.mode {
            DraftMode::Create => true,
            DraftMode::Edit { verified, .. } => verified,
        }
    }

    /// Record the meter reading the user typed and re-derive usage/cost.
    ///
    /// A reading below the baseline is rejected and the electricity fields
    /// are forced back to zero so a stale cost can never be submitted; the
    /// caller surfaces the error and re-prompts.
    pub fn set_current_reading(&mut self, reading: f64) -> Result<(), BillingError> {
        match meter::usage_and_cost(self.previous_reading, Some(reading), self.unit_price) {
            Ok(Some(uc)) => {
                self.current_reading = Some(reading);
                self.electricity_usage = uc.usage;
                self.electricity_price = uc.cost;
                Ok(())
            }
            Ok(None) => {
                self.clear_current_reading();
                Ok(())
            }
            Err(err) => {
                self.clear_current_reading();
                Err(err)
            }
        }
    }

    pub fn clear_current_reading(&mut self) {
        self.current_reading = None;
        self.electricity_usage = 0.0;
        self.electricity_price = 0;
    }

    pub fn charges(&self) -> ChargeBreakdown {
        ChargeBreakdown {
            price: self.rent,
            water_price: self.water_price,
            internet_price: self.internet_price,
            general_price: self.general_price,
            electricity_price: self.electricity_price,
        }
    }

    /// Running grand total shown at the bottom of the form.
    pub fn total(&self) -> i64 {
        self.charges().total()
    }

    fn require_complete(&self) -> Result<(NaiveDate, f64), WorkflowError> {
        let due_date = self
            .due_date
            .ok_or(WorkflowError::Incomplete("due date is required"))?;
        let _ = self
            .current_reading
            .ok_or(WorkflowError::Incomplete("current meter reading is required"))?;
        Ok((due_date, self.electricity_usage))
    }

    /// Create payload. `electricity_num` carries the usage delta, never the
    /// absolute reading.
    pub fn payload(&self) -> Result<InvoicePayload, WorkflowError> {
        let (due_date, usage) = self.require_complete()?;
        Ok(InvoicePayload {
            rr_id: self.rr_id,
            price: self.rent,
            water_price: Some(self.water_price),
            internet_price: Some(self.internet_price),
            general_price: Some(self.general_price),
            electricity_price: Some(self.electricity_price),
            electricity_num: Some(usage),
            due_date,
            payment_date: self.payment_date,
        })
    }

    /// Update payload — same shape as create minus `rr_id`.
    pub fn update_payload(&self) -> Result<InvoiceUpdate, WorkflowError> {
        let (due_date, usage) = self.require_complete()?;
        Ok(InvoiceUpdate {
            price: self.rent,
            water_price: Some(self.water_price),
            internet_price: Some(self.internet_price),
            general_price: Some(self.general_price),
            electricity_price: Some(self.electricity_price),
            electricity_num: Some(usage),
            due_date,
            payment_date: self.payment_date,
        })
    }
}

/// Drives the invoice create/edit flows against the backend stores.
pub struct InvoiceWorkflow<S> {
    store: S,
}

impl<S> InvoiceWorkflow<S>
where
    S: ContractStore + InvoiceStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Open a create form for `rr_id`: fetch the contract and its full
    /// invoice history, derive the meter baseline, prefill contract prices.
    pub async fn begin_create(&self, rr_id: ContractId) -> Result<InvoiceDraft, WorkflowError> {
        let contract = self.store.contract(rr_id).await?;
        let history = self.store.invoices_for_contract(rr_id).await?;
        let previous = meter::previous_reading(&contract, &history);
        Ok(InvoiceDraft::create(&contract, previous))
    }

    /// Open an edit form for an existing invoice, reconstructing the
    /// absolute reading window for its position in history.
    ///
    /// If the invoice has vanished from the freshly fetched history (the
    /// fetch raced a delete), the baseline degrades to 0 and the draft is
    /// flagged unverified instead of failing the whole flow.
    pub async fn begin_edit(&self, invoice_id: InvoiceId) -> Result<InvoiceDraft, WorkflowError> {
        let invoice = self.store.invoice(invoice_id).await?;
        let contract = self.store.contract(invoice.rr_id).await?;
        let history = self.store.invoices_for_contract(invoice.rr_id).await?;

        match meter::readings_for_edit(&contract, &history, invoice_id) {
            Ok(window) => Ok(InvoiceDraft::edit(&contract, &invoice, window, true)),
            Err(BillingError::UnknownInvoice(_)) => {
                warn!(
                    invoice_id = %invoice_id,
                    rr_id = %invoice.rr_id,
                    "invoice missing from fetched history; prior reading degraded to 0"
                );
                let window = ReadingWindow {
                    previous: 0.0,
                    current: invoice.electricity_num.unwrap_or(0.0),
                };
                Ok(InvoiceDraft::edit(&contract, &invoice, window, false))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Submit the draft to the store it belongs to (create or update).
    pub async fn submit(&self, draft: &InvoiceDraft) -> Result<Invoice, WorkflowError> {
        match draft.mode() {
            DraftMode::Create => {
                let payload = draft.payload()?;
                Ok(self.store.create_invoice(&payload).await?)
            }
            DraftMode::Edit { invoice_id, .. } => {
                let update = draft.update_payload()?;
                Ok(self.store.update_invoice(invoice_id, &update).await?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};

    use rentroll_core::RoomId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ts(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn contract(rr: i64, initial: f64) -> Contract {
        Contract {
            rr_id: ContractId::new(rr),
            room_id: RoomId::new(1),
            tenant_name: "Tran Van An".to_string(),
            tenant_phone: "0912345678".to_string(),
            number_of_tenants: 1,
            contract_url: None,
            start_date: date(2025, 1, 1),
            end_date: date(2025, 12, 31),
            deposit: 0,
            monthly_rent: 2_500_000,
            initial_electricity_num: initial,
            electricity_unit_price: 3500.0,
            water_price: 80_000,
            internet_price: 100_000,
            general_price: 100_000,
            is_active: true,
            created_at: ts(2025, 1, 1, 0),
            room: None,
        }
    }

    fn invoice(id: i64, rr: i64, usage: f64, due: NaiveDate) -> Invoice {
        Invoice {
            invoice_id: InvoiceId::new(id),
            rr_id: ContractId::new(rr),
            price: 2_500_000,
            water_price: Some(80_000),
            internet_price: Some(100_000),
            general_price: Some(100_000),
            electricity_price: Some(meter::round_half_up(usage * 3500.0)),
            electricity_num: Some(usage),
            due_date: due,
            is_paid: false,
            payment_date: None,
            created_at: ts(2025, 1, 1, 0) + chrono::Duration::days(id),
            rented_room: None,
        }
    }

    /// In-memory store; `detail` and `history` are separate so tests can
    /// model a history fetch racing a delete.
    #[derive(Default)]
    struct FakeStore {
        contracts: HashMap<ContractId, Contract>,
        history: Vec<Invoice>,
        detail: HashMap<InvoiceId, Invoice>,
        submitted: Mutex<Vec<InvoicePayload>>,
        updated: Mutex<Vec<(InvoiceId, InvoiceUpdate)>>,
    }

    impl FakeStore {
        fn with_contract(contract: Contract) -> Self {
            let mut store = Self::default();
            store.contracts.insert(contract.rr_id, contract);
            store
        }

        fn with_history(mut self, history: Vec<Invoice>) -> Self {
            for inv in &history {
                self.detail.insert(inv.invoice_id, inv.clone());
            }
            self.history = history;
            self
        }
    }

    #[async_trait]
    impl ContractStore for FakeStore {
        async fn active_contracts(&self) -> Result<Vec<Contract>, StoreError> {
            Ok(self.contracts.values().cloned().collect())
        }

        async fn contract(&self, rr_id: ContractId) -> Result<Contract, StoreError> {
            self.contracts.get(&rr_id).cloned().ok_or(StoreError::NotFound)
        }
    }

    #[async_trait]
    impl InvoiceStore for FakeStore {
        async fn invoices_for_contract(
            &self,
            rr_id: ContractId,
        ) -> Result<Vec<Invoice>, StoreError> {
            Ok(self
                .history
                .iter()
                .filter(|inv| inv.rr_id == rr_id)
                .cloned()
                .collect())
        }

        async fn invoice(&self, invoice_id: InvoiceId) -> Result<Invoice, StoreError> {
            self.detail
                .get(&invoice_id)
                .cloned()
                .ok_or(StoreError::NotFound)
        }

        async fn create_invoice(&self, payload: &InvoicePayload) -> Result<Invoice, StoreError> {
            self.submitted.lock().unwrap().push(payload.clone());
            Ok(Invoice {
                invoice_id: InvoiceId::new(100 + self.submitted.lock().unwrap().len() as i64),
                rr_id: payload.rr_id,
                price: payload.price,
                water_price: payload.water_price,
                internet_price: payload.internet_price,
                general_price: payload.general_price,
                electricity_price: payload.electricity_price,
                electricity_num: payload.electricity_num,
                due_date: payload.due_date,
                is_paid: false,
                payment_date: payload.payment_date,
                created_at: Utc::now(),
                rented_room: None,
            })
        }

        async fn update_invoice(
            &self,
            invoice_id: InvoiceId,
            update: &InvoiceUpdate,
        ) -> Result<Invoice, StoreError> {
            self.updated.lock().unwrap().push((invoice_id, update.clone()));
            let mut stored = self
                .detail
                .get(&invoice_id)
                .cloned()
                .ok_or(StoreError::NotFound)?;
            stored.price = update.price;
            stored.electricity_price = update.electricity_price;
            stored.electricity_num = update.electricity_num;
            stored.due_date = update.due_date;
            stored.payment_date = update.payment_date;
            Ok(stored)
        }
    }

    #[tokio::test]
    async fn create_draft_prefills_contract_prices_and_baseline() {
        rentroll_observability::tracing::init();

        let store = FakeStore::with_contract(contract(1, 0.0))
            .with_history(vec![invoice(1, 1, 120.0, date(2025, 1, 5))]);
        let workflow = InvoiceWorkflow::new(store);

        let draft = workflow.begin_create(ContractId::new(1)).await.unwrap();
        assert_eq!(draft.previous_reading(), 120.0);
        assert_eq!(draft.rent, 2_500_000);
        assert_eq!(draft.water_price, 80_000);
        assert_eq!(draft.internet_price, 100_000);
        assert_eq!(draft.general_price, 100_000);
        assert_eq!(draft.current_reading(), None);
        assert_eq!(draft.electricity_price(), 0);
        assert!(draft.is_verified());
    }

    #[tokio::test]
    async fn first_and_second_invoice_end_to_end() {
        let store = FakeStore::with_contract(contract(1, 0.0));
        let workflow = InvoiceWorkflow::new(store);

        // First month: baseline 0, reading 120.
        let mut draft = workflow.begin_create(ContractId::new(1)).await.unwrap();
        assert_eq!(draft.previous_reading(), 0.0);
        draft.set_current_reading(120.0).unwrap();
        assert_eq!(draft.electricity_usage(), 120.0);
        assert_eq!(draft.electricity_price(), 420_000);
        draft.due_date = Some(date(2025, 1, 5));

        let created = workflow.submit(&draft).await.unwrap();
        assert_eq!(created.electricity_num, Some(120.0));
        assert_eq!(created.electricity_price, Some(420_000));

        // Second month: history now holds the first invoice.
        let mut second = {
            let store = FakeStore::with_contract(contract(1, 0.0))
                .with_history(vec![invoice(1, 1, 120.0, date(2025, 1, 5))]);
            InvoiceWorkflow::new(store)
                .begin_create(ContractId::new(1))
                .await
                .unwrap()
        };
        assert_eq!(second.previous_reading(), 120.0);
        second.set_current_reading(200.0).unwrap();
        assert_eq!(second.electricity_usage(), 80.0);
        assert_eq!(second.electricity_price(), 280_000);
    }

    #[tokio::test]
    async fn rejected_reading_forces_fields_to_zero_and_withholds_payload() {
        let store = FakeStore::with_contract(contract(1, 0.0))
            .with_history(vec![invoice(1, 1, 120.0, date(2025, 1, 5))]);
        let workflow = InvoiceWorkflow::new(store);

        let mut draft = workflow.begin_create(ContractId::new(1)).await.unwrap();
        draft.due_date = Some(date(2025, 2, 5));
        draft.set_current_reading(150.0).unwrap();
        assert_eq!(draft.electricity_price(), 105_000);

        // Below the 120 baseline: rejected, and the earlier values are gone.
        let err = draft.set_current_reading(100.0).unwrap_err();
        assert_eq!(err, BillingError::CurrentBelowPrevious {
            previous: 120.0,
            current: 100.0,
        });
        assert_eq!(draft.current_reading(), None);
        assert_eq!(draft.electricity_usage(), 0.0);
        assert_eq!(draft.electricity_price(), 0);

        // No payload until a valid reading is re-entered.
        assert!(matches!(
            draft.payload(),
            Err(WorkflowError::Incomplete(_))
        ));
    }

    #[tokio::test]
    async fn edit_draft_reconstructs_reading_window_for_position() {
        let store = FakeStore::with_contract(contract(1, 50.0)).with_history(vec![
            invoice(1, 1, 20.0, date(2025, 1, 5)),
            invoice(2, 1, 30.0, date(2025, 2, 5)),
        ]);
        let workflow = InvoiceWorkflow::new(store);

        let draft = workflow.begin_edit(InvoiceId::new(2)).await.unwrap();
        assert_eq!(draft.previous_reading(), 70.0);
        assert_eq!(draft.current_reading(), Some(100.0));
        assert!(draft.is_verified());

        let draft = workflow.begin_edit(InvoiceId::new(1)).await.unwrap();
        assert_eq!(draft.previous_reading(), 50.0);
        assert_eq!(draft.current_reading(), Some(70.0));
    }

    #[tokio::test]
    async fn edit_survives_history_racing_a_delete() {
        // Detail fetch still returns the invoice, but it is gone from the
        // freshly fetched history list.
        let mut store = FakeStore::with_contract(contract(1, 50.0));
        let target = invoice(9, 1, 25.0, date(2025, 3, 5));
        store.detail.insert(target.invoice_id, target);
        let workflow = InvoiceWorkflow::new(store);

        let draft = workflow.begin_edit(InvoiceId::new(9)).await.unwrap();
        assert!(!draft.is_verified());
        assert_eq!(draft.previous_reading(), 0.0);
        assert_eq!(draft.current_reading(), Some(25.0));
    }

    #[tokio::test]
    async fn submitting_an_edit_sends_an_update_without_rr_id() {
        let store = FakeStore::with_contract(contract(1, 50.0)).with_history(vec![
            invoice(1, 1, 20.0, date(2025, 1, 5)),
            invoice(2, 1, 30.0, date(2025, 2, 5)),
        ]);
        let workflow = InvoiceWorkflow::new(store);

        let mut draft = workflow.begin_edit(InvoiceId::new(2)).await.unwrap();
        // Correct the reading: 70 -> 95 instead of 100.
        draft.set_current_reading(95.0).unwrap();
        workflow.submit(&draft).await.unwrap();

        let updated = workflow.store().updated.lock().unwrap();
        let (id, update) = &updated[0];
        assert_eq!(*id, InvoiceId::new(2));
        assert_eq!(update.electricity_num, Some(25.0));
        assert_eq!(update.electricity_price, Some(87_500));
    }

    #[tokio::test]
    async fn payload_requires_a_due_date() {
        let store = FakeStore::with_contract(contract(1, 0.0));
        let workflow = InvoiceWorkflow::new(store);

        let mut draft = workflow.begin_create(ContractId::new(1)).await.unwrap();
        draft.set_current_reading(10.0).unwrap();
        match draft.payload().unwrap_err() {
            WorkflowError::Incomplete(field) => assert!(field.contains("due date")),
            other => panic!("expected Incomplete, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_total_matches_charge_breakdown() {
        let store = FakeStore::with_contract(contract(1, 0.0));
        let workflow = InvoiceWorkflow::new(store);

        let mut draft = workflow.begin_create(ContractId::new(1)).await.unwrap();
        draft.set_current_reading(120.0).unwrap();
        // 2_500_000 + 80_000 + 100_000 + 100_000 + 420_000
        assert_eq!(draft.total(), 3_200_000);

        draft.due_date = Some(date(2025, 1, 5));
        let payload = draft.payload().unwrap();
        assert_eq!(payload.monthly_total(), draft.total());
    }
}
