use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Submission {
    pub id: i32,
    pub survey_id: i32,
    pub user_id: i32,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub survey_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Default)]
pub struct Query {
    pub survey_id_eq: Option<i32>,
    pub user_id_eq: Option<i32>,
    pub is_complete_eq: Option<bool>,
}

/// A completed submission labelled with the username of whoever took it.
#[derive(Debug, Clone, FromRow)]
pub struct Respondent {
    pub submission_id: i32,
    pub username: String,
}
