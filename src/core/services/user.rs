use crate::config::Admins;
use crate::core::models::user::{Credentials, Insert as UserInsert, User};
use crate::core::ports::repository::{Store, UserCommon};
use crate::error::Error;
use crate::hex::ToHex;
use crate::rand::{thread_rng, Rng};
use crate::sha2::{Digest, Sha256};
use log::info;

const MIN_PASSWORD_LEN: usize = 6;
const MAX_USERNAME_LEN: usize = 150;

pub fn hash_password(pass: &str, slt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(pass);
    hasher.update(slt);
    hasher.finalize().encode_hex()
}

pub fn random_salt() -> String {
    let chars: Vec<char> = ('0'..='9').chain('a'..='z').chain('A'..='Z').collect();
    let mut rng = thread_rng();
    (0..32).map(|_| chars[rng.gen_range(0..chars.len())]).collect()
}

pub async fn signup<S>(store: &mut S, Credentials { username, password }: Credentials, admins: &Admins) -> Result<i32, Error>
where
    S: Store,
{
    let username = username.trim();
    if username.is_empty() || username.chars().count() > MAX_USERNAME_LEN {
        return Err(Error::BusinessError("invalid username".into()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(Error::BusinessError(format!("password must be at least {} characters", MIN_PASSWORD_LEN)));
    }
    if UserCommon::get_by_username(store, username).await?.is_some() {
        return Err(Error::BusinessError("username already taken".into()));
    }
    let slt = random_salt();
    let is_superuser = admins.contains(username);
    let id = UserCommon::insert(
        store,
        UserInsert {
            username: username.into(),
            password: hash_password(&password, &slt),
            salt: slt,
            is_superuser,
        },
    )
    .await?;
    info!("user {} signed up (superuser: {})", id, is_superuser);
    Ok(id)
}

pub async fn login<S>(store: &mut S, Credentials { username, password }: Credentials) -> Result<User, Error>
where
    S: Store,
{
    match UserCommon::get_by_username(store, username.trim()).await? {
        Some(user) if hash_password(&password, &user.salt) == user.password => Ok(user),
        _ => Err(Error::Unauthorized),
    }
}
