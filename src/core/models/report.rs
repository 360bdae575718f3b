use crate::core::models::{option::Opt, question::Question, survey::Survey};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct OptionResult {
    #[serde(flatten)]
    pub option: Opt,
    pub count: i64,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionResult {
    #[serde(flatten)]
    pub question: Question,
    pub total: i64,
    pub options: Vec<OptionResult>,
}

#[derive(Debug, Serialize)]
pub struct SurveyResults {
    pub survey: Survey,
    pub questions: Vec<QuestionResult>,
    pub num_submissions: i64,
    pub public_path: String,
}

/// A question the user got wrong, with the material to revisit.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Mistake {
    pub question_id: i32,
    pub prompt: String,
    pub link: Option<String>,
}
