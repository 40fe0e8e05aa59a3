use async_trait::async_trait;
use serde::Serialize;

use crate::models::{AnswerSubmission, AttemptDetail, AttemptSummary, GradeResult, StartedQuiz};
use crate::{ApiClient, ApiError};

#[derive(Serialize)]
struct StartRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitRequest<'a> {
    attempt_id: &'a str,
    answers: &'a [AnswerSubmission],
}

/// Quiz attempt endpoints. Grading happens entirely on the server.
#[async_trait(?Send)]
pub trait QuizApi {
    /// New randomized attempt, optionally restricted to one category.
    async fn start_quiz(&self, category: Option<&str>) -> Result<StartedQuiz, ApiError>;

    async fn submit_quiz(
        &self,
        attempt_id: &str,
        answers: &[AnswerSubmission],
    ) -> Result<GradeResult, ApiError>;

    async fn history(&self) -> Result<Vec<AttemptSummary>, ApiError>;

    async fn attempt_detail(
        &self,
        attempt_id: &str,
        wrong_only: bool,
    ) -> Result<AttemptDetail, ApiError>;
}

#[async_trait(?Send)]
impl QuizApi for ApiClient {
    async fn start_quiz(&self, category: Option<&str>) -> Result<StartedQuiz, ApiError> {
        self.post("quiz/start", &StartRequest { category }).await
    }

    async fn submit_quiz(
        &self,
        attempt_id: &str,
        answers: &[AnswerSubmission],
    ) -> Result<GradeResult, ApiError> {
        self.post(
            "quiz/submit",
            &SubmitRequest {
                attempt_id,
                answers,
            },
        )
        .await
    }

    async fn history(&self) -> Result<Vec<AttemptSummary>, ApiError> {
        self.get("quiz/history", &[]).await
    }

    async fn attempt_detail(
        &self,
        attempt_id: &str,
        wrong_only: bool,
    ) -> Result<AttemptDetail, ApiError> {
        self.get(
            &format!("quiz/attempts/{attempt_id}"),
            &[("wrongOnly", wrong_only.to_string())],
        )
        .await
    }
}
