use sqlx::SqlitePool;

use crate::models::user::UserConfig;

pub async fn get(db: &SqlitePool, user_id: i64) -> Result<Option<UserConfig>, sqlx::Error> {
    sqlx::query_as::<_, UserConfig>(
        "SELECT user_id, create_time, quickAddResumeVersion FROM config WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
}

pub async fn quick_add_resume_version(
    db: &SqlitePool,
    user_id: i64,
) -> Result<Option<String>, sqlx::Error> {
    let version = sqlx::query_scalar::<_, Option<String>>(
        "SELECT quickAddResumeVersion FROM config WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(version.flatten())
}

/// Returns `false` when the user has no config row.
pub async fn update_resume_version(
    db: &SqlitePool,
    user_id: i64,
    resume_version: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("UPDATE config SET quickAddResumeVersion = ? WHERE user_id = ?")
        .bind(resume_version)
        .bind(user_id)
        .execute(db)
        .await?;

    Ok(res.rows_affected() == 1)
}
