use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Opt {
    pub id: i32,
    pub question_id: i32,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Deserialize)]
pub struct OptCreate {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub question_id: i32,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Default)]
pub struct Query {
    pub question_id_eq: Option<i32>,
    pub survey_id_eq: Option<i32>,
}
