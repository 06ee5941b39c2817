use serde::{Deserialize, Serialize};

#[derive(Debug, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// bcrypt hash
    pub password: String,
}

/// Per-user settings row, created together with its user.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserConfig {
    pub user_id: i64,
    pub create_time: String,
    #[sqlx(rename = "quickAddResumeVersion")]
    pub quick_add_resume_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "USERNAME")]
    pub username: String,
    #[serde(rename = "USER_ID")]
    pub user_id: i64,
    pub exp: i64,
}
