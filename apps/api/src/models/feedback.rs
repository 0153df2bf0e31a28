use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One chatbot exchange. The log is append-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeedbackEntry {
    pub id: Uuid,
    pub user_input: String,
    pub bot_response: String,
    pub timestamp: DateTime<Utc>,
}

impl FeedbackEntry {
    pub fn new(user_input: &str, bot_response: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_input: user_input.to_string(),
            bot_response: bot_response.to_string(),
            timestamp: Utc::now(),
        }
    }
}
