use async_trait::async_trait;
use thiserror::Error;

use crate::prompt::{
    ChatPrompt, ChatReply, RevenueReport, RevenueReportRequest, RoomRecommendationRequest,
    RoomRecommendations,
};

#[derive(Debug, Error)]
pub enum AiError {
    #[error("invalid prompt: {0}")]
    InvalidInput(String),

    #[error("assistant backend error: {0}")]
    Backend(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Gateway to the backend's AI endpoints.
///
/// Implemented over HTTP by the client crate; tests substitute canned
/// responders. Answers are display-ready markdown strings, not structured
/// data — the backend owns the prompt engineering.
#[async_trait]
pub trait AiAssistant: Send + Sync {
    async fn chat(&self, prompt: &ChatPrompt) -> Result<ChatReply, AiError>;

    async fn recommend_rooms(
        &self,
        request: &RoomRecommendationRequest,
    ) -> Result<RoomRecommendations, AiError>;

    async fn revenue_report(
        &self,
        request: &RevenueReportRequest,
    ) -> Result<RevenueReport, AiError>;
}
