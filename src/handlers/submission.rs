use crate::actix_web::web::{Data, Json, Path};
use crate::context::UserInfo;
use crate::core::models::{answer::Submit, survey::SurveyDetail};
use crate::core::ports::repository::Manager;
use crate::core::services::submission as service;
use crate::database::sqlx::PgSqlxManager;
use crate::error::Error;
use crate::response::CreateResponse;
use crate::serde::Serialize;

pub async fn start(user_info: UserInfo, survey_id: Path<(i32,)>, manager: Data<PgSqlxManager>) -> Result<Json<CreateResponse>, Error> {
    let mut db = manager.db().await?;
    let id = service::start(&mut db, user_info.id, survey_id.into_inner().0).await?;
    Ok(Json(CreateResponse { id }))
}

pub async fn form(user_info: UserInfo, path: Path<(i32, i32)>, manager: Data<PgSqlxManager>) -> Result<Json<SurveyDetail>, Error> {
    let (survey_id, submission_id) = path.into_inner();
    let mut db = manager.db().await?;
    Ok(Json(service::form(&mut db, user_info.id, survey_id, submission_id).await?))
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub id: i32,
    pub is_complete: bool,
}

pub async fn submit(
    user_info: UserInfo,
    path: Path<(i32, i32)>,
    Json(answers): Json<Vec<Submit>>,
    manager: Data<PgSqlxManager>,
) -> Result<Json<SubmitResponse>, Error> {
    let (survey_id, submission_id) = path.into_inner();
    let tx = manager.tx().await?;
    service::submit(tx, user_info.id, survey_id, submission_id, answers).await?;
    Ok(Json(SubmitResponse {
        id: submission_id,
        is_complete: true,
    }))
}
