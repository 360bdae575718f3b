use crate::core::models::option::Opt;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub survey_id: i32,
    pub prompt: String,
    pub link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionCreate {
    pub prompt: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub survey_id: i32,
    pub prompt: String,
    pub link: Option<String>,
}

#[derive(Debug, Default)]
pub struct Query {
    pub survey_id_eq: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionWithOptions {
    #[serde(flatten)]
    pub question: Question,
    pub options: Vec<Opt>,
}
