use crate::dotenv;
use crate::error::Error;

pub static DATABASE_URL: &str = "DATABASE_URL";
pub static EXPORT_PATH: &str = "EXPORT_PATH";
pub static BIND_ADDRESS: &str = "BIND_ADDRESS";
pub static MAX_DB_CONNECTIONS: &str = "MAX_DB_CONNECTIONS";
pub static SURVEY_ADMINS: &str = "SURVEY_ADMINS";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub export_path: String,
    pub bind_address: String,
    pub max_db_connections: u32,
    pub admins: Admins,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let max_db_connections = match dotenv::var(MAX_DB_CONNECTIONS) {
            Ok(v) => v
                .parse()
                .map_err(|_| Error::ServerError(format!("invalid {}: {}", MAX_DB_CONNECTIONS, v)))?,
            Err(_) => 5,
        };
        Ok(Self {
            database_url: dotenv::var(DATABASE_URL)?,
            jwt_secret: dotenv::var(crate::middlewares::jwt::JWT_SECRET)?,
            export_path: dotenv::var(EXPORT_PATH).unwrap_or_else(|_| "exports".into()),
            bind_address: dotenv::var(BIND_ADDRESS).unwrap_or_else(|_| "0.0.0.0:8000".into()),
            max_db_connections,
            admins: Admins::parse(&dotenv::var(SURVEY_ADMINS).unwrap_or_default()),
        })
    }
}

/// Usernames that are granted superuser rights when they sign up.
#[derive(Debug, Clone, Default)]
pub struct Admins(Vec<String>);

impl Admins {
    pub fn parse(raw: &str) -> Self {
        Self(raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.0.iter().any(|a| a == username)
    }
}
