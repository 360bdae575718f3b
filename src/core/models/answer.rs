use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Deserialize)]
pub struct Submit {
    pub question_id: i32,
    pub option_id: i32,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Answer {
    pub id: i32,
    pub submission_id: i32,
    pub option_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub submission_id: i32,
    pub option_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Default)]
pub struct Query {
    pub survey_id_eq: Option<i32>,
    pub submission_id_eq: Option<i32>,
    pub user_id_eq: Option<i32>,
    pub is_complete_eq: Option<bool>,
}

/// An answer joined with the option it picked and that option's question.
#[derive(Debug, Clone, FromRow)]
pub struct AnswerDetail {
    pub submission_id: i32,
    pub user_id: i32,
    pub question_id: i32,
    pub prompt: String,
    pub link: Option<String>,
    pub option_id: i32,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, FromRow)]
pub struct OptionCount {
    pub option_id: i32,
    pub count: i64,
}
