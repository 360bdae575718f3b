use crate::actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use crate::error::Error;
use std::future::{ready, Ready};

/// The authenticated caller, put in the request extensions by the JWT middleware.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserInfo {
    pub id: i32,
}

impl FromRequest for UserInfo {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(req.extensions().get::<Self>().copied().ok_or(Error::Unauthorized))
    }
}
