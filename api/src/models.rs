//! Wire shapes exchanged with the backend. Field names follow the
//! backend's camelCase JSON; Mongo-style `_id` keys map to `id`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Student,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Role::Admin => Role::Student,
            Role::Student => Role::Admin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Rows of the admin user list share the session user's shape.
pub type UserRow = AuthUser;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionChoice {
    /// Stable identifier used for grading; not the option's position.
    pub key: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: String,
    pub category: String,
    pub text: String,
    pub options: Vec<OptionChoice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartedQuiz {
    pub attempt_id: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSubmission {
    pub question_id: String,
    pub selected_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    pub question_id: String,
    #[serde(default)]
    pub category: String,
    pub text: String,
    #[serde(default)]
    pub options: Vec<OptionChoice>,
    /// Empty when the question was left unanswered.
    #[serde(default)]
    pub selected_key: String,
    pub correct_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeResult {
    pub score: u32,
    pub total: u32,
    pub feedback: Vec<FeedbackItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub score: u32,
    #[serde(default)]
    pub question_ids: Vec<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptDetail {
    pub attempt_id: String,
    #[serde(default)]
    pub submitted: bool,
    #[serde(flatten)]
    pub grade: GradeResult,
}

/// Question as stored in the bank (admin view, includes the answer key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankQuestion {
    #[serde(rename = "_id")]
    pub id: String,
    pub category: String,
    pub text: String,
    #[serde(default)]
    pub options: Vec<OptionChoice>,
    pub correct_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    pub category: String,
    pub text: String,
    pub options: Vec<OptionChoice>,
    pub correct_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_attempts: u32,
    pub avg_score: f64,
    pub avg_percent: f64,
}

/// Attempts whose percent score falls into the bucket starting at `bucket` (0, 10, ... 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionBucket {
    #[serde(rename = "_id")]
    pub bucket: u32,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OverviewReport {
    pub overview: Overview,
    #[serde(default)]
    pub distribution: Vec<DistributionBucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category: String,
    pub total: u32,
    pub correct: u32,
    pub accuracy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    pub score: u32,
    pub total: u32,
    pub percent: f64,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StudentStats {
    #[serde(default)]
    pub last: Option<ScoreSnapshot>,
    #[serde(default)]
    pub best: Option<ScoreSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStudent {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub avg_percent: f64,
    pub attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRow {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub score: u32,
    pub total: u32,
    pub percent: f64,
    pub created_at: String,
}
