use crate::actix_web::web::{Data, Json, Path, Query};
use crate::context::UserInfo;
use crate::core::models::survey::{ActiveSurvey, Survey, SurveyCreate, SurveyDetail};
use crate::core::ports::repository::Manager;
use crate::core::services::survey as service;
use crate::database::sqlx::PgSqlxManager;
use crate::error::Error;
use crate::request::Pagination;
use crate::response::{CreateResponse, DeleteResponse, List};
use crate::serde::Serialize;

pub async fn create(user_info: UserInfo, Json(body): Json<SurveyCreate>, manager: Data<PgSqlxManager>) -> Result<Json<CreateResponse>, Error> {
    let mut db = manager.db().await?;
    let id = service::create_survey(&mut db, user_info.id, body).await?;
    Ok(Json(CreateResponse { id }))
}

pub async fn list(user_info: UserInfo, Query(Pagination { page, size }): Query<Pagination>, manager: Data<PgSqlxManager>) -> Result<Json<List<Survey>>, Error> {
    let mut db = manager.db().await?;
    let (surveys, total) = service::list_surveys(&mut db, user_info.id, page, size).await?;
    Ok(Json(List::new(surveys, total)))
}

pub async fn detail(user_info: UserInfo, survey_id: Path<(i32,)>, manager: Data<PgSqlxManager>) -> Result<Json<SurveyDetail>, Error> {
    let mut db = manager.db().await?;
    let detail = service::draft_detail(&mut db, user_info.id, survey_id.into_inner().0).await?;
    Ok(Json(detail))
}

pub async fn delete(user_info: UserInfo, survey_id: Path<(i32,)>, manager: Data<PgSqlxManager>) -> Result<Json<DeleteResponse>, Error> {
    let mut db = manager.db().await?;
    service::delete_survey(&mut db, user_info.id, survey_id.into_inner().0).await?;
    Ok(Json(DeleteResponse::new(1)))
}

#[derive(Debug, Serialize)]
pub struct ActivateResponse {
    pub id: i32,
    pub is_active: bool,
}

pub async fn activate(user_info: UserInfo, survey_id: Path<(i32,)>, manager: Data<PgSqlxManager>) -> Result<Json<ActivateResponse>, Error> {
    let id = survey_id.into_inner().0;
    let mut db = manager.db().await?;
    service::activate_survey(&mut db, user_info.id, id).await?;
    Ok(Json(ActivateResponse { id, is_active: true }))
}

pub async fn landing(survey_id: Path<(i32,)>, manager: Data<PgSqlxManager>) -> Result<Json<ActiveSurvey>, Error> {
    let mut db = manager.db().await?;
    Ok(Json(service::active_survey(&mut db, survey_id.into_inner().0).await?))
}
