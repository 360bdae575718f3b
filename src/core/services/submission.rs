use crate::core::models::{
    answer::{Insert as AnswerInsert, Submit as AnswerSubmit},
    question::QuestionWithOptions,
    submission::{Insert as SubmissionInsert, Submission},
    survey::SurveyDetail,
};
use crate::core::ports::repository::{AnswerCommon, Store, SubmissionCommon, TxStore};
use crate::core::services::survey::{active, questions_with_options};
use crate::error::Error;
use log::{info, warn};
use std::collections::HashSet;

pub async fn start<S>(store: &mut S, uid: i32, survey_id: i32) -> Result<i32, Error>
where
    S: Store,
{
    active(store, survey_id).await?;
    let id = SubmissionCommon::insert(store, SubmissionInsert { survey_id, user_id: uid }).await?;
    Ok(id)
}

fn check_open(submission: &Submission, uid: i32, survey_id: i32) -> Result<(), Error> {
    if submission.survey_id != survey_id || submission.user_id != uid || submission.is_complete {
        return Err(Error::NotFound("submission".into()));
    }
    Ok(())
}

pub async fn form<S>(store: &mut S, uid: i32, survey_id: i32, submission_id: i32) -> Result<SurveyDetail, Error>
where
    S: Store,
{
    let survey = active(store, survey_id).await?;
    let submission = SubmissionCommon::get(store, submission_id).await?;
    check_open(&submission, uid, survey_id)?;
    let questions = questions_with_options(store, survey_id).await?;
    Ok(SurveyDetail { survey, questions })
}

/// Every question answered exactly once with one of its own options.
pub fn validate_answers(questions: &[QuestionWithOptions], answers: &[AnswerSubmit]) -> Result<(), Error> {
    let mut answered = HashSet::new();
    for a in answers {
        let question = questions
            .iter()
            .find(|q| q.question.id == a.question_id)
            .ok_or_else(|| Error::BusinessError(format!("question {} does not belong to this survey", a.question_id)))?;
        if !answered.insert(a.question_id) {
            return Err(Error::BusinessError(format!("question {} answered more than once", a.question_id)));
        }
        if !question.options.iter().any(|o| o.id == a.option_id) {
            return Err(Error::BusinessError(format!("option {} is not a choice of question {}", a.option_id, a.question_id)));
        }
    }
    if let Some(missing) = questions.iter().find(|q| !answered.contains(&q.question.id)) {
        return Err(Error::BusinessError(format!("question {} has not been answered", missing.question.id)));
    }
    Ok(())
}

async fn save_answers<T>(store: &mut T, uid: i32, survey_id: i32, submission_id: i32, answers: Vec<AnswerSubmit>) -> Result<(), Error>
where
    T: TxStore,
{
    active(store, survey_id).await?;
    let submission = SubmissionCommon::get_for_update(store, submission_id).await?;
    check_open(&submission, uid, survey_id)?;
    let questions = questions_with_options(store, survey_id).await?;
    validate_answers(&questions, &answers)?;
    AnswerCommon::bulk_insert(
        store,
        answers
            .into_iter()
            .map(|a| AnswerInsert {
                submission_id,
                option_id: a.option_id,
                user_id: uid,
            })
            .collect(),
    )
    .await?;
    SubmissionCommon::complete(store, submission_id).await?;
    Ok(())
}

/// Records all answers and completes the submission, or changes nothing.
pub async fn submit<T>(mut store: T, uid: i32, survey_id: i32, submission_id: i32, answers: Vec<AnswerSubmit>) -> Result<(), Error>
where
    T: TxStore,
{
    match save_answers(&mut store, uid, survey_id, submission_id, answers).await {
        Ok(()) => {
            store.commit().await?;
            info!("submission {} of survey {} completed by user {}", submission_id, survey_id, uid);
            Ok(())
        }
        Err(e) => {
            warn!("submission {} of survey {} rejected: {}", submission_id, survey_id, e);
            store.rollback().await?;
            Err(e)
        }
    }
}
