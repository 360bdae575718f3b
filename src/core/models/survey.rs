use crate::core::models::question::QuestionWithOptions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Survey {
    pub id: i32,
    pub title: String,
    pub is_active: bool,
    pub creator_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct SurveyCreate {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub title: String,
    pub creator_id: i32,
}

#[derive(Debug, Default)]
pub struct Query {
    pub creator_id_eq: Option<i32>,
    pub is_active_eq: Option<bool>,
}

/// A survey together with everything needed to edit or answer it.
#[derive(Debug, Serialize)]
pub struct SurveyDetail {
    #[serde(flatten)]
    pub survey: Survey,
    pub questions: Vec<QuestionWithOptions>,
}

#[derive(Debug, Serialize)]
pub struct ActiveSurvey {
    pub id: i32,
    pub title: String,
}
