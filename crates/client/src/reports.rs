//! Reporting endpoints (`/reports/*`).
//!
//! Statistics are computed server-side (stored procedures over the invoice
//! tables); these wrappers only shape requests and decode the aggregates.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use rentroll_core::ContractId;

use crate::error::ApiError;
use crate::http::{Acknowledgement, ApiClient};

/// `GET /reports/system-overview` — headline dashboard numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemOverview {
    pub total_houses: i64,
    pub total_rooms: i64,
    pub available_rooms: i64,
    pub occupied_rooms: i64,
    /// Percentage in [0, 100], rounded server-side.
    pub occupancy_rate: f64,
    pub active_contracts: i64,
    pub pending_invoices: i64,
    pub current_month_revenue: f64,
    pub generated_at: DateTime<Utc>,
}

/// `POST /reports/revenue-stats` aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueStats {
    pub total_revenue: f64,
    pub paid_invoices: i64,
    pub pending_invoices: i64,
    pub avg_monthly_revenue: f64,
}

/// Vacant-room search criteria for prospective tenants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSearchFilters {
    pub min_price: i64,
    pub max_price: i64,
    pub min_capacity: u32,
    pub max_capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}

/// One match from the vacant-room search (joined with its house).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableRoom {
    pub room_id: i64,
    pub room_name: String,
    pub price: i64,
    pub capacity: u32,
    pub house_name: String,
    pub district: Option<String>,
    pub address_line: Option<String>,
    pub asset_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSearch {
    pub rooms: Vec<AvailableRoom>,
    pub total_found: i64,
}

/// One contract ending within the renewal window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiringContract {
    pub rr_id: ContractId,
    pub tenant_name: String,
    pub tenant_phone: String,
    pub room_name: String,
    pub house_name: String,
    pub end_date: NaiveDate,
    pub days_remaining: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiringContracts {
    pub expiring_contracts: Vec<ExpiringContract>,
    pub total_count: i64,
    pub checked_at: DateTime<Utc>,
}

/// Which detailed report the backend should assemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Revenue,
    Occupancy,
    Tenant,
}

/// `POST /reports/generate-report` result. The row shape varies per report
/// kind, so rows stay as raw JSON for the table renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedReport {
    pub report_type: ReportKind,
    pub period: String,
    pub data: Vec<JsonValue>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
struct DateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
struct ReportRequest {
    report_type: ReportKind,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl ApiClient {
    pub async fn system_overview(&self) -> Result<SystemOverview, ApiError> {
        self.get_json("reports/system-overview").await
    }

    pub async fn revenue_stats(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<RevenueStats, ApiError> {
        self.post_json("reports/revenue-stats", &DateRange {
            start_date,
            end_date,
        })
        .await
    }

    pub async fn search_available_rooms(
        &self,
        filters: &RoomSearchFilters,
    ) -> Result<RoomSearch, ApiError> {
        self.post_json("reports/search-rooms", filters).await
    }

    pub async fn expiring_contracts(&self) -> Result<ExpiringContracts, ApiError> {
        self.get_json("reports/expiring-contracts").await
    }

    pub async fn generate_report(
        &self,
        report_type: ReportKind,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<DetailedReport, ApiError> {
        self.post_json("reports/generate-report", &ReportRequest {
            report_type,
            start_date,
            end_date,
        })
        .await
    }

    /// Kick off server-side invoice generation for every active contract.
    pub async fn create_monthly_invoices(&self) -> Result<Acknowledgement, ApiError> {
        self.post_empty("reports/create-monthly-invoices").await
    }
}
