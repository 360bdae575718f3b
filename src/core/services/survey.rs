use crate::core::models::{
    common::Pagination,
    option::Query as OptionQuery,
    question::{Query as QuestionQuery, QuestionWithOptions},
    survey::{ActiveSurvey, Insert as SurveyInsert, Query as SurveyQuery, Survey, SurveyCreate, SurveyDetail},
};
use crate::core::ports::repository::{OptionCommon, QuestionCommon, Store, SurveyCommon, UserCommon};
use crate::error::Error;
use itertools::Itertools;
use log::info;

const MAX_TITLE_LEN: usize = 64;

/// The survey `id` if `uid` created it, otherwise not found.
pub async fn owned_survey<S>(store: &mut S, uid: i32, id: i32) -> Result<Survey, Error>
where
    S: Store,
{
    let survey = SurveyCommon::get(store, id).await?;
    if survey.creator_id != uid {
        return Err(Error::NotFound("survey".into()));
    }
    Ok(survey)
}

/// The caller's survey, provided it has not been activated yet.
pub async fn owned_draft<S>(store: &mut S, uid: i32, id: i32) -> Result<Survey, Error>
where
    S: Store,
{
    let survey = owned_survey(store, uid, id).await?;
    if survey.is_active {
        return Err(Error::NotFound("draft survey".into()));
    }
    Ok(survey)
}

pub async fn active<S>(store: &mut S, id: i32) -> Result<Survey, Error>
where
    S: Store,
{
    let survey = SurveyCommon::get(store, id).await?;
    if !survey.is_active {
        return Err(Error::NotFound("survey".into()));
    }
    Ok(survey)
}

pub async fn questions_with_options<S>(store: &mut S, survey_id: i32) -> Result<Vec<QuestionWithOptions>, Error>
where
    S: Store,
{
    let questions = QuestionCommon::query(
        store,
        QuestionQuery {
            survey_id_eq: Some(survey_id),
        },
    )
    .await?;
    let mut options = OptionCommon::query(
        store,
        OptionQuery {
            survey_id_eq: Some(survey_id),
            ..Default::default()
        },
    )
    .await?
    .into_iter()
    .into_group_map_by(|o| o.question_id);
    Ok(questions
        .into_iter()
        .map(|question| QuestionWithOptions {
            options: options.remove(&question.id).unwrap_or_default(),
            question,
        })
        .collect())
}

pub async fn create_survey<S>(store: &mut S, uid: i32, survey: SurveyCreate) -> Result<i32, Error>
where
    S: Store,
{
    let user = UserCommon::get(store, uid).await?;
    if !user.is_superuser {
        return Err(Error::Forbidden);
    }
    let title = survey.title.trim();
    if title.is_empty() {
        return Err(Error::BusinessError("survey title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(Error::BusinessError(format!("survey title exceeds {} characters", MAX_TITLE_LEN)));
    }
    let id = SurveyCommon::insert(
        store,
        SurveyInsert {
            title: title.into(),
            creator_id: uid,
        },
    )
    .await?;
    info!("survey {} created by user {}", id, uid);
    Ok(id)
}

pub async fn list_surveys<S>(store: &mut S, uid: i32, page: i64, size: i64) -> Result<(Vec<Survey>, i64), Error>
where
    S: Store,
{
    let query = SurveyQuery {
        creator_id_eq: Some(uid),
        ..Default::default()
    };
    let total = SurveyCommon::count(store, &query).await?;
    let surveys = SurveyCommon::query(store, &query, Some(Pagination::from_page(page, size))).await?;
    Ok((surveys, total))
}

pub async fn delete_survey<S>(store: &mut S, uid: i32, id: i32) -> Result<(), Error>
where
    S: Store,
{
    owned_survey(store, uid, id).await?;
    SurveyCommon::delete(store, id).await?;
    info!("survey {} deleted by user {}", id, uid);
    Ok(())
}

pub async fn draft_detail<S>(store: &mut S, uid: i32, id: i32) -> Result<SurveyDetail, Error>
where
    S: Store,
{
    let survey = owned_draft(store, uid, id).await?;
    let questions = questions_with_options(store, id).await?;
    Ok(SurveyDetail { survey, questions })
}

pub async fn activate_survey<S>(store: &mut S, uid: i32, id: i32) -> Result<(), Error>
where
    S: Store,
{
    owned_draft(store, uid, id).await?;
    let questions = QuestionCommon::query(store, QuestionQuery { survey_id_eq: Some(id) }).await?;
    if questions.is_empty() {
        return Err(Error::BusinessError("cannot activate a survey without questions".into()));
    }
    SurveyCommon::activate(store, id).await?;
    info!("survey {} activated", id);
    Ok(())
}

pub async fn active_survey<S>(store: &mut S, id: i32) -> Result<ActiveSurvey, Error>
where
    S: Store,
{
    let survey = active(store, id).await?;
    Ok(ActiveSurvey {
        id: survey.id,
        title: survey.title,
    })
}
