use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use rentroll_core::{ContractId, InvoiceId};
use rentroll_tenancy::Contract;

/// One billing period's charges for a contract, as the backend serves it.
///
/// All `*_price` fields are whole VND. `electricity_num` is the usage delta
/// for the period in kWh, never an absolute meter reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: InvoiceId,
    pub rr_id: ContractId,
    /// Base rent for the period.
    pub price: i64,
    pub water_price: Option<i64>,
    pub internet_price: Option<i64>,
    pub general_price: Option<i64>,
    pub electricity_price: Option<i64>,
    /// kWh consumed during the period.
    pub electricity_num: Option<f64>,
    pub due_date: NaiveDate,
    pub is_paid: bool,
    pub payment_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    /// Denormalized contract, present on detail/list endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rented_room: Option<Contract>,
}

impl Invoice {
    pub fn charges(&self) -> ChargeBreakdown {
        ChargeBreakdown {
            price: self.price,
            water_price: self.water_price.unwrap_or(0),
            internet_price: self.internet_price.unwrap_or(0),
            general_price: self.general_price.unwrap_or(0),
            electricity_price: self.electricity_price.unwrap_or(0),
        }
    }

    /// Grand total for the period. The single total used by every surface.
    pub fn monthly_total(&self) -> i64 {
        self.charges().total()
    }
}

/// Per-period charge aggregation.
///
/// Invoices, payloads, and drafts all total through this type; a second
/// hand-rolled sum anywhere else is a bug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    pub price: i64,
    pub water_price: i64,
    pub internet_price: i64,
    pub general_price: i64,
    pub electricity_price: i64,
}

impl ChargeBreakdown {
    pub fn total(&self) -> i64 {
        self.price
            + self.water_price
            + self.internet_price
            + self.general_price
            + self.electricity_price
    }
}

/// Create payload for `POST /invoices/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePayload {
    pub rr_id: ContractId,
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electricity_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electricity_num: Option<f64>,
    pub due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
}

impl InvoicePayload {
    pub fn charges(&self) -> ChargeBreakdown {
        ChargeBreakdown {
            price: self.price,
            water_price: self.water_price.unwrap_or(0),
            internet_price: self.internet_price.unwrap_or(0),
            general_price: self.general_price.unwrap_or(0),
            electricity_price: self.electricity_price.unwrap_or(0),
        }
    }

    pub fn monthly_total(&self) -> i64 {
        self.charges().total()
    }
}

/// Update payload for `PUT /invoices/{id}` — same shape minus `rr_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceUpdate {
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electricity_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electricity_num: Option<f64>,
    pub due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
}

/// References to `history`, sorted ascending by `(due_date, created_at)`.
///
/// This ordering defines billing-period chronology everywhere: the backend
/// returns invoices unsorted, and `created_at` breaks ties between invoices
/// issued for the same due date.
pub fn chronological(history: &[Invoice]) -> Vec<&Invoice> {
    let mut sorted: Vec<&Invoice> = history.iter().collect();
    sorted.sort_by_key(|inv| (inv.due_date, inv.created_at));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn invoice(id: i64, due: NaiveDate, created: DateTime<Utc>) -> Invoice {
        Invoice {
            invoice_id: InvoiceId::new(id),
            rr_id: ContractId::new(1),
            price: 2_500_000,
            water_price: None,
            internet_price: None,
            general_price: None,
            electricity_price: None,
            electricity_num: None,
            due_date: due,
            is_paid: false,
            payment_date: None,
            created_at: created,
            rented_room: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ts(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn total_with_all_optional_charges_absent_is_rent_alone() {
        let inv = invoice(1, date(2025, 1, 5), ts(2025, 1, 1, 9));
        assert_eq!(inv.monthly_total(), 2_500_000);
    }

    #[test]
    fn total_sums_every_charge() {
        let mut inv = invoice(1, date(2025, 1, 5), ts(2025, 1, 1, 9));
        inv.water_price = Some(80_000);
        inv.internet_price = Some(100_000);
        inv.general_price = Some(100_000);
        inv.electricity_price = Some(420_000);
        assert_eq!(inv.monthly_total(), 3_200_000);
    }

    #[test]
    fn payload_and_invoice_totals_agree() {
        let payload = InvoicePayload {
            rr_id: ContractId::new(1),
            price: 2_500_000,
            water_price: Some(80_000),
            internet_price: None,
            general_price: None,
            electricity_price: Some(420_000),
            electricity_num: Some(120.0),
            due_date: date(2025, 1, 5),
            payment_date: None,
        };
        assert_eq!(payload.monthly_total(), 3_000_000);
        assert_eq!(payload.charges(), ChargeBreakdown {
            price: 2_500_000,
            water_price: 80_000,
            internet_price: 0,
            general_price: 0,
            electricity_price: 420_000,
        });
    }

    #[test]
    fn chronological_orders_by_due_date_then_created_at() {
        let history = vec![
            invoice(3, date(2025, 2, 5), ts(2025, 2, 1, 9)),
            invoice(1, date(2025, 1, 5), ts(2025, 1, 1, 9)),
            // Same due date as id 3, created earlier: must sort before it.
            invoice(2, date(2025, 2, 5), ts(2025, 1, 31, 9)),
        ];
        let ids: Vec<i64> = chronological(&history)
            .iter()
            .map(|inv| inv.invoice_id.as_i64())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
