//! Question bank management (admin only on the server side).

use crate::models::{BankQuestion, QuestionPayload};
use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_questions(&self) -> Result<Vec<BankQuestion>, ApiError> {
        self.get("questions/", &[]).await
    }

    pub async fn create_question(
        &self,
        payload: &QuestionPayload,
    ) -> Result<BankQuestion, ApiError> {
        self.post("questions/", payload).await
    }

    pub async fn update_question(
        &self,
        id: &str,
        payload: &QuestionPayload,
    ) -> Result<BankQuestion, ApiError> {
        self.put(&format!("questions/{id}"), payload).await
    }

    pub async fn delete_question(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("questions/{id}")).await
    }
}
