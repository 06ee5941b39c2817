use sqlx::SqlitePool;

use crate::models::user::User;

pub async fn find_by_username(
    db: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(db)
        .await
}

pub async fn find_by_id(db: &SqlitePool, user_id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(db)
        .await
}

pub async fn username_exists(db: &SqlitePool, username: &str) -> Result<bool, sqlx::Error> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(db)
        .await?;

    Ok(count > 0)
}

/// Inserts the user and its config row in one transaction and returns the new user id.
pub async fn create_with_config(
    db: &SqlitePool,
    username: &str,
    password_hash: &str,
    create_time: &str,
) -> Result<i64, sqlx::Error> {
    let mut tx = db.begin().await?;

    let user_id = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
        .bind(username)
        .bind(password_hash)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    sqlx::query("INSERT INTO config (user_id, create_time) VALUES (?, ?)")
        .bind(user_id)
        .bind(create_time)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(user_id)
}
