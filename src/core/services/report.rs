use crate::core::models::{
    answer::{OptionCount, Query as AnswerQuery},
    question::QuestionWithOptions,
    report::{Mistake, OptionResult, QuestionResult, SurveyResults},
    submission::Query as SubmissionQuery,
};
use crate::core::ports::repository::{AnswerCommon, Store, SubmissionCommon};
use crate::core::services::survey::{active, owned_survey, questions_with_options};
use crate::error::Error;
use std::collections::{HashMap, HashSet};

/// Share of the question's answers that went to each option, in percent.
pub fn tally(questions: Vec<QuestionWithOptions>, counts: &[OptionCount]) -> Vec<QuestionResult> {
    let counts: HashMap<i32, i64> = counts.iter().map(|c| (c.option_id, c.count)).collect();
    questions
        .into_iter()
        .map(|QuestionWithOptions { question, options }| {
            let total: i64 = options.iter().map(|o| counts.get(&o.id).copied().unwrap_or(0)).sum();
            let options = options
                .into_iter()
                .map(|option| {
                    let count = counts.get(&option.id).copied().unwrap_or(0);
                    let percent = if total > 0 { 100.0 * count as f64 / total as f64 } else { 0.0 };
                    OptionResult { option, count, percent }
                })
                .collect();
            QuestionResult { question, total, options }
        })
        .collect()
}

pub fn public_path(survey_id: i32) -> String {
    format!("/surveys/{}", survey_id)
}

pub async fn results<S>(store: &mut S, uid: i32, survey_id: i32) -> Result<SurveyResults, Error>
where
    S: Store,
{
    let survey = owned_survey(store, uid, survey_id).await?;
    if !survey.is_active {
        return Err(Error::NotFound("survey".into()));
    }
    let questions = questions_with_options(store, survey_id).await?;
    let counts = AnswerCommon::count_by_option(store, survey_id).await?;
    let num_submissions = SubmissionCommon::count(
        store,
        SubmissionQuery {
            survey_id_eq: Some(survey_id),
            is_complete_eq: Some(true),
            ..Default::default()
        },
    )
    .await?;
    Ok(SurveyResults {
        survey,
        questions: tally(questions, &counts),
        num_submissions,
        public_path: public_path(survey_id),
    })
}

/// Questions the user answered with an incorrect option.
pub async fn review<S>(store: &mut S, uid: i32, survey_id: i32) -> Result<Vec<Mistake>, Error>
where
    S: Store,
{
    active(store, survey_id).await?;
    let answers = AnswerCommon::query_details(
        store,
        AnswerQuery {
            survey_id_eq: Some(survey_id),
            user_id_eq: Some(uid),
            is_complete_eq: Some(true),
            ..Default::default()
        },
    )
    .await?;
    let mut seen = HashSet::new();
    Ok(answers
        .into_iter()
        .filter(|a| !a.is_correct && seen.insert(a.question_id))
        .map(|a| Mistake {
            question_id: a.question_id,
            prompt: a.prompt,
            link: a.link,
        })
        .collect())
}
