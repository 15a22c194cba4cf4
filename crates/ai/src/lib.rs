//! `rentroll-ai`
//!
//! **Responsibility:** boundary types for the AI chat/report helper.
//!
//! All inference happens behind the backend's `/ai/*` endpoints; this crate
//! only shapes the questions and answers. It must not depend on domain
//! projections and it never mutates domain state.

pub mod assistant;
pub mod prompt;

pub use assistant::{AiAssistant, AiError};
pub use prompt::{
    ChatPrompt, ChatReply, RevenueReport, RevenueReportRequest, RoomRecommendationRequest,
    RoomRecommendations,
};
