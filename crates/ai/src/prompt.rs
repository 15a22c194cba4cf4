use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A question for the chat helper, with flags selecting which system data
/// the backend folds into the model's context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPrompt {
    pub question: String,
    pub include_stats: bool,
    pub include_available_rooms: bool,
    pub include_pending_invoices: bool,
}

impl ChatPrompt {
    /// Prompt with the full system context, the chat widget's default.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            include_stats: true,
            include_available_rooms: true,
            include_pending_invoices: true,
        }
    }

    pub fn without_context(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            include_stats: false,
            include_available_rooms: false,
            include_pending_invoices: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub answer: String,
}

/// Ask for rooms matching a tenant's budget and party size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecommendationRequest {
    /// VND per month.
    pub budget: i64,
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecommendations {
    pub recommendations: String,
}

/// Ask for a narrative revenue report over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueReportRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueReport {
    pub report: String,
    pub period: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prompt_requests_full_context() {
        let prompt = ChatPrompt::new("Phong nao con trong?");
        assert!(prompt.include_stats);
        assert!(prompt.include_available_rooms);
        assert!(prompt.include_pending_invoices);
    }

    #[test]
    fn district_is_omitted_when_absent() {
        let req = RoomRecommendationRequest {
            budget: 3_000_000,
            capacity: 2,
            district: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("district").is_none());
    }
}
