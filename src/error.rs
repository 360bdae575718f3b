use actix_web::{http::StatusCode, ResponseError};

use crate::actix_web;
use crate::dotenv::Error as DotError;
use crate::jsonwebtoken::errors::Error as JsonWebTokenError;
use crate::rust_xlsxwriter::XlsxError;
use crate::sqlx::{self, migrate::MigrateError};
use crate::thiserror::Error as ThisError;
use std::io;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    MigrateError(#[from] MigrateError),

    #[error("http error: {0}")]
    ActixError(#[from] actix_web::error::Error),

    #[error("dotenv error: {0}")]
    DotEnvError(#[from] DotError),

    #[error("jwt error: {0}")]
    JWTError(#[from] JsonWebTokenError),

    #[error("io error: {0}")]
    IOError(#[from] io::Error),

    #[error("spreadsheet error: {0}")]
    SpreadsheetError(#[from] XlsxError),

    #[error("business error: {0}")]
    BusinessError(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("forbidden")]
    Forbidden,

    #[error("unauthorized")]
    Unauthorized,

    #[error("server error: {0}")]
    ServerError(String),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::DatabaseError(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            Error::BusinessError(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized | Error::JWTError(_) => StatusCode::UNAUTHORIZED,
            Error::Forbidden => StatusCode::FORBIDDEN,
            Error::ActixError(e) => e.as_response_error().status_code(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
