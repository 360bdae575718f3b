use serde::Deserialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub salt: String,
    pub is_superuser: bool,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub username: String,
    pub password: String,
    pub salt: String,
    pub is_superuser: bool,
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
