use crate::actix_web::web::{Data, Json, Path};
use crate::context::UserInfo;
use crate::core::models::option::{Opt, OptCreate};
use crate::core::ports::repository::Manager;
use crate::core::services::option as service;
use crate::database::sqlx::PgSqlxManager;
use crate::error::Error;
use crate::response::CreateResponse;

pub async fn create(
    user_info: UserInfo,
    path: Path<(i32, i32)>,
    Json(body): Json<OptCreate>,
    manager: Data<PgSqlxManager>,
) -> Result<Json<CreateResponse>, Error> {
    let (survey_id, question_id) = path.into_inner();
    let mut db = manager.db().await?;
    let id = service::create_option(&mut db, user_info.id, survey_id, question_id, body).await?;
    Ok(Json(CreateResponse { id }))
}

pub async fn list(user_info: UserInfo, path: Path<(i32, i32)>, manager: Data<PgSqlxManager>) -> Result<Json<Vec<Opt>>, Error> {
    let (survey_id, question_id) = path.into_inner();
    let mut db = manager.db().await?;
    Ok(Json(service::list_options(&mut db, user_info.id, survey_id, question_id).await?))
}
