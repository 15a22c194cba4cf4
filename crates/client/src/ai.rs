//! HTTP implementation of the AI assistant gateway (`/ai/*`).

use async_trait::async_trait;

use rentroll_ai::{
    AiAssistant, AiError, ChatPrompt, ChatReply, RevenueReport, RevenueReportRequest,
    RoomRecommendationRequest, RoomRecommendations,
};

use crate::http::ApiClient;

#[async_trait]
impl AiAssistant for ApiClient {
    async fn chat(&self, prompt: &ChatPrompt) -> Result<ChatReply, AiError> {
        if prompt.question.trim().is_empty() {
            return Err(AiError::InvalidInput("question must not be empty".to_string()));
        }
        Ok(self.post_json("ai/chat", prompt).await?)
    }

    async fn recommend_rooms(
        &self,
        request: &RoomRecommendationRequest,
    ) -> Result<RoomRecommendations, AiError> {
        Ok(self.post_json("ai/recommend-rooms", request).await?)
    }

    async fn revenue_report(
        &self,
        request: &RevenueReportRequest,
    ) -> Result<RevenueReport, AiError> {
        Ok(self.post_json("ai/generate-revenue-report", request).await?)
    }
}
