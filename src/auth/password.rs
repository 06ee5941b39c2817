use crate::error::AppError;

/// Work factor for new hashes. Existing hashes carry their own cost.
pub const BCRYPT_COST: u32 = 10;

pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST)).await??;
    Ok(hashed)
}

/// Returns `Ok(false)` for a wrong password. A stored hash that is not a
/// bcrypt string is an error.
pub async fn verify_password(password: String, hashed: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed)).await??;
    Ok(matches)
}
