use crate::actix_web::web::{Data, Json, Path};
use crate::context::UserInfo;
use crate::core::models::question::QuestionCreate;
use crate::core::ports::repository::Manager;
use crate::core::services::question as service;
use crate::database::sqlx::PgSqlxManager;
use crate::error::Error;
use crate::response::CreateResponse;

pub async fn create(user_info: UserInfo, survey_id: Path<(i32,)>, Json(body): Json<QuestionCreate>, manager: Data<PgSqlxManager>) -> Result<Json<CreateResponse>, Error> {
    let mut db = manager.db().await?;
    let id = service::create_question(&mut db, user_info.id, survey_id.into_inner().0, body).await?;
    Ok(Json(CreateResponse { id }))
}
