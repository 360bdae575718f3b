use crate::core::models::option::{Insert as OptionInsert, Opt, OptCreate, Query as OptionQuery};
use crate::core::ports::repository::{OptionCommon, Store};
use crate::core::services::question::{draft_question, owned_question};
use crate::error::Error;

const MAX_TEXT_LEN: usize = 128;

pub async fn create_option<S>(store: &mut S, uid: i32, survey_id: i32, question_id: i32, option: OptCreate) -> Result<i32, Error>
where
    S: Store,
{
    draft_question(store, uid, survey_id, question_id).await?;
    let text = option.text.trim();
    if text.is_empty() {
        return Err(Error::BusinessError("option text must not be empty".into()));
    }
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(Error::BusinessError(format!("option text exceeds {} characters", MAX_TEXT_LEN)));
    }
    OptionCommon::insert(
        store,
        OptionInsert {
            question_id,
            text: text.into(),
            is_correct: option.is_correct,
        },
    )
    .await
}

pub async fn list_options<S>(store: &mut S, uid: i32, survey_id: i32, question_id: i32) -> Result<Vec<Opt>, Error>
where
    S: Store,
{
    owned_question(store, uid, survey_id, question_id).await?;
    OptionCommon::query(
        store,
        OptionQuery {
            question_id_eq: Some(question_id),
            ..Default::default()
        },
    )
    .await
}
