pub mod export;
pub mod option;
pub mod question;
pub mod report;
pub mod submission;
pub mod survey;

use crate::actix_web::{
    cookie::{time::OffsetDateTime, CookieBuilder},
    http::StatusCode,
    web::{Data, Json},
    HttpResponse,
};
use crate::config::Admins;
use crate::core::models::user::Credentials;
use crate::core::ports::repository::Manager;
use crate::core::ports::tokener::Tokener;
use crate::core::services::user;
use crate::database::sqlx::PgSqlxManager;
use crate::error::Error;
use crate::impls::tokener::jwt::JWT;
use crate::middlewares::jwt::{Claim, JWT_TOKEN};
use crate::response::CreateResponse;
use crate::serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

pub async fn signup(Json(credentials): Json<Credentials>, manager: Data<PgSqlxManager>, admins: Data<Admins>) -> Result<Json<CreateResponse>, Error> {
    let mut db = manager.db().await?;
    let id = user::signup(&mut db, credentials, &admins).await?;
    Ok(Json(CreateResponse { id }))
}

pub async fn login(Json(credentials): Json<Credentials>, manager: Data<PgSqlxManager>, tokener: Data<JWT>) -> Result<HttpResponse, Error> {
    let mut db = manager.db().await?;
    let user = user::login(&mut db, credentials).await?;
    let token = tokener.gen_token(&Claim::new(user.id))?;
    Ok(HttpResponse::build(StatusCode::OK)
        .cookie(CookieBuilder::new(JWT_TOKEN, token.clone()).path("/").http_only(true).finish())
        .json(LoginResponse { token }))
}

pub async fn logout() -> HttpResponse {
    HttpResponse::build(StatusCode::OK)
        .cookie(CookieBuilder::new(JWT_TOKEN, "").path("/").expires(OffsetDateTime::now_utc()).finish())
        .finish()
}
