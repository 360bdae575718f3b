use crate::actix_web::{
    self,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    HttpMessage,
};
use crate::{context::UserInfo, error::Error};
use sqlx::{query_scalar, PgPool};
use std::future::{ready, Future, Ready};
use std::pin::Pin;
use std::rc::Rc;

/// No row when the survey does not exist, otherwise whether the caller created it or is a superuser.
pub static SURVEY_MANAGER_STMT: &str = "SELECT s.creator_id = $1 OR EXISTS(SELECT 1 FROM users WHERE id = $1 AND is_superuser)
    FROM surveys AS s
    WHERE s.id = $2";

/// Guards a scope with a query over `(uid, path id)` returning at most one boolean row.
/// No row is not found, `false` is forbidden. Must be mounted inside the JWT middleware.
pub struct Author {
    db: PgPool,
    sql_stmt: String,
    path_arg_name: String,
}

impl Author {
    pub fn new(db: PgPool, sql_stmt: &str, path_arg_name: &str) -> Self {
        Self {
            db,
            sql_stmt: sql_stmt.into(),
            path_arg_name: path_arg_name.into(),
        }
    }
}

impl<S> Transform<S, ServiceRequest> for Author
where
    S: Service<ServiceRequest, Response = ServiceResponse, Error = actix_web::Error> + 'static,
    S::Future: 'static,
{
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type Response = S::Response;
    type Error = S::Error;
    type InitError = ();
    type Transform = AuthorMiddleware<S>;
    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthorMiddleware {
            db: self.db.clone(),
            sql_stmt: self.sql_stmt.clone(),
            path_arg_name: self.path_arg_name.clone(),
            service: Rc::new(service),
        }))
    }
}

pub struct AuthorMiddleware<S> {
    db: PgPool,
    sql_stmt: String,
    path_arg_name: String,
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AuthorMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse, Error = actix_web::Error> + 'static,
    S::Future: 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<ServiceResponse, Self::Error>>>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let uid = match req.extensions().get::<UserInfo>() {
            Some(user_info) => user_info.id,
            None => return Box::pin(async move { Err(Error::Unauthorized.into()) }),
        };
        let target = match req.match_info().get(&self.path_arg_name) {
            Some(raw) => raw.parse::<i32>(),
            None => {
                let err = Error::ServerError(format!("authorizer mounted outside of a {{{}}} scope", self.path_arg_name));
                return Box::pin(async move { Err(err.into()) });
            }
        };
        let target = match target {
            Ok(id) => id,
            Err(_) => return Box::pin(async move { Err(Error::NotFound(req.path().to_owned()).into()) }),
        };
        let stmt = self.sql_stmt.clone();
        let db = self.db.clone();
        let service = self.service.clone();
        Box::pin(async move {
            let allowed: Option<bool> = query_scalar(&stmt)
                .bind(uid)
                .bind(target)
                .fetch_optional(&db)
                .await
                .map_err(Error::from)?;
            match allowed {
                None => Err(Error::NotFound(req.path().to_owned()).into()),
                Some(false) => Err(Error::Forbidden.into()),
                Some(true) => service.call(req).await,
            }
        })
    }
}
