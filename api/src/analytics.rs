//! Usage analytics. The `me/*` endpoints are the student self-serve views;
//! the rest accept an optional `userId` filter and are admin only.

use crate::models::{AttemptRow, CategoryRow, OverviewReport, StudentStats, TopStudent};
use crate::{ApiClient, ApiError};

fn user_filter(user_id: Option<&str>) -> Vec<(&'static str, String)> {
    user_id
        .map(|id| vec![("userId", id.to_string())])
        .unwrap_or_default()
}

impl ApiClient {
    pub async fn overview(&self, user_id: Option<&str>) -> Result<OverviewReport, ApiError> {
        self.get("analytics/overview", &user_filter(user_id)).await
    }

    pub async fn categories(&self, user_id: Option<&str>) -> Result<Vec<CategoryRow>, ApiError> {
        self.get("analytics/categories", &user_filter(user_id))
            .await
    }

    pub async fn student_stats(&self, user_id: &str) -> Result<StudentStats, ApiError> {
        self.get("analytics/student-stats", &user_filter(Some(user_id)))
            .await
    }

    pub async fn my_overview(&self) -> Result<OverviewReport, ApiError> {
        self.get("analytics/me/overview", &[]).await
    }

    pub async fn my_categories(&self) -> Result<Vec<CategoryRow>, ApiError> {
        self.get("analytics/me/categories", &[]).await
    }

    pub async fn my_summary(&self) -> Result<StudentStats, ApiError> {
        self.get("analytics/me/summary", &[]).await
    }

    pub async fn top_students(&self) -> Result<Vec<TopStudent>, ApiError> {
        self.get("analytics/top-students", &[]).await
    }

    pub async fn last_attempts(&self, user_id: Option<&str>) -> Result<Vec<AttemptRow>, ApiError> {
        self.get("analytics/last-attempts", &user_filter(user_id))
            .await
    }
}
