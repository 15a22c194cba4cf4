use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use rentroll_core::{ContractId, DomainError, DomainResult, RoomId};
use rentroll_housing::Room;

/// A tenancy contract as the backend serves it (`rr_id` unique key).
///
/// Monetary fields are whole VND. `initial_electricity_num` is the absolute
/// meter reading at contract start; every later reading is derived from it
/// plus the per-invoice usage deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub rr_id: ContractId,
    pub room_id: RoomId,
    pub tenant_name: String,
    pub tenant_phone: String,
    pub number_of_tenants: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub deposit: i64,
    pub monthly_rent: i64,
    /// Meter reading (kWh) at contract start.
    pub initial_electricity_num: f64,
    /// VND per kWh.
    pub electricity_unit_price: f64,
    pub water_price: i64,
    pub internet_price: i64,
    pub general_price: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    /// Denormalized room, present on detail endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,
}

impl Contract {
    /// Whether the contract is live on `today` (active flag and date range).
    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.is_active && self.start_date <= today && today <= self.end_date
    }

    /// Whether the contract ends within the next `days` days.
    ///
    /// Already-expired contracts are excluded; the expiring-contracts report
    /// only lists ones that can still be renewed.
    pub fn expires_within(&self, today: NaiveDate, days: i64) -> bool {
        if !self.is_active || self.end_date < today {
            return false;
        }
        (self.end_date - today).num_days() <= days
    }
}

/// Form payload: register a tenancy against a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewContract {
    pub room_id: RoomId,
    pub tenant_name: String,
    pub tenant_phone: String,
    pub number_of_tenants: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub deposit: i64,
    pub monthly_rent: i64,
    pub initial_electricity_num: f64,
    pub electricity_unit_price: f64,
    pub water_price: i64,
    pub internet_price: i64,
    pub general_price: i64,
}

impl NewContract {
    pub fn validate(&self) -> DomainResult<()> {
        if self.tenant_name.trim().is_empty() {
            return Err(DomainError::validation("tenant name must not be empty"));
        }
        if self.start_date >= self.end_date {
            return Err(DomainError::validation(
                "contract start date must be before end date",
            ));
        }
        if self.monthly_rent <= 0 {
            return Err(DomainError::validation("monthly rent must be positive"));
        }
        if self.electricity_unit_price <= 0.0 {
            return Err(DomainError::validation(
                "electricity unit price must be positive",
            ));
        }
        if self.initial_electricity_num < 0.0 {
            return Err(DomainError::validation(
                "initial meter reading must not be negative",
            ));
        }
        if self.number_of_tenants == 0 {
            return Err(DomainError::validation(
                "number of tenants must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Form payload: partial contract update (None = keep existing).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_tenants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_rent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_electricity_num: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electricity_unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
