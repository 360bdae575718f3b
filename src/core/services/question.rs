use crate::core::models::question::{Insert as QuestionInsert, Question, QuestionCreate};
use crate::core::ports::repository::{QuestionCommon, Store};
use crate::core::services::survey::{owned_draft, owned_survey};
use crate::error::Error;

const MAX_PROMPT_LEN: usize = 128;

pub async fn create_question<S>(store: &mut S, uid: i32, survey_id: i32, question: QuestionCreate) -> Result<i32, Error>
where
    S: Store,
{
    let survey = owned_survey(store, uid, survey_id).await?;
    if survey.is_active {
        return Err(Error::BusinessError("questions can only be added to a draft survey".into()));
    }
    let prompt = question.prompt.trim();
    if prompt.is_empty() {
        return Err(Error::BusinessError("question prompt must not be empty".into()));
    }
    if prompt.chars().count() > MAX_PROMPT_LEN {
        return Err(Error::BusinessError(format!("question prompt exceeds {} characters", MAX_PROMPT_LEN)));
    }
    let id = QuestionCommon::insert(
        store,
        QuestionInsert {
            survey_id,
            prompt: prompt.into(),
            link: question.link.map(|l| l.trim().to_owned()).filter(|l| !l.is_empty()),
        },
    )
    .await?;
    Ok(id)
}

/// A question of one of the caller's surveys.
pub async fn owned_question<S>(store: &mut S, uid: i32, survey_id: i32, question_id: i32) -> Result<Question, Error>
where
    S: Store,
{
    owned_survey(store, uid, survey_id).await?;
    let question = QuestionCommon::get(store, question_id).await?;
    if question.survey_id != survey_id {
        return Err(Error::NotFound("question".into()));
    }
    Ok(question)
}

/// Like `owned_question` but the survey must still be a draft.
pub async fn draft_question<S>(store: &mut S, uid: i32, survey_id: i32, question_id: i32) -> Result<Question, Error>
where
    S: Store,
{
    owned_draft(store, uid, survey_id).await?;
    owned_question(store, uid, survey_id, question_id).await
}
