use sqlx::SqlitePool;

use crate::models::application::{JobApplication, NewApplication};

const COLUMNS: &str = "id, user_id, job_title, company_name, job_description, job_location, \
     job_url, application_deadline_date, application_date, resume_version, status, notes, \
     is_marked";

pub async fn list_for_user(
    db: &SqlitePool,
    user_id: i64,
) -> Result<Vec<JobApplication>, sqlx::Error> {
    sqlx::query_as::<_, JobApplication>(&format!(
        "SELECT {COLUMNS} FROM job_applications \
         WHERE user_id = ? \
         ORDER BY application_date DESC, id DESC"
    ))
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn get_owned(
    db: &SqlitePool,
    user_id: i64,
    application_id: i64,
) -> Result<Option<JobApplication>, sqlx::Error> {
    sqlx::query_as::<_, JobApplication>(&format!(
        "SELECT {COLUMNS} FROM job_applications WHERE id = ? AND user_id = ?"
    ))
    .bind(application_id)
    .bind(user_id)
    .fetch_optional(db)
    .await
}

/// Returns the id of the inserted row, read from the same statement.
pub async fn insert(
    db: &SqlitePool,
    user_id: i64,
    application: &NewApplication,
) -> Result<i64, sqlx::Error> {
    let res = sqlx::query(
        r#"
        INSERT INTO job_applications (
            user_id, job_title, company_name, job_description, job_location, job_url,
            application_deadline_date, application_date, resume_version, status, notes, is_marked
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(&application.job_title)
    .bind(&application.company_name)
    .bind(&application.job_description)
    .bind(&application.job_location)
    .bind(&application.job_url)
    .bind(&application.application_deadline_date)
    .bind(&application.application_date)
    .bind(&application.resume_version)
    .bind(application.status.as_str())
    .bind(&application.notes)
    .bind(application.is_marked)
    .execute(db)
    .await?;

    Ok(res.last_insert_rowid())
}

/// Overwrites every mutable field. Returns `false` when no row with that id
/// belongs to `user_id`.
pub async fn update_owned(
    db: &SqlitePool,
    user_id: i64,
    application_id: i64,
    application: &NewApplication,
) -> Result<bool, sqlx::Error> {
    let res = sqlx::query(
        r#"
        UPDATE job_applications
        SET job_title = ?, company_name = ?, job_description = ?, job_location = ?,
            job_url = ?, application_deadline_date = ?, application_date = ?,
            resume_version = ?, status = ?, notes = ?, is_marked = ?
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(&application.job_title)
    .bind(&application.company_name)
    .bind(&application.job_description)
    .bind(&application.job_location)
    .bind(&application.job_url)
    .bind(&application.application_deadline_date)
    .bind(&application.application_date)
    .bind(&application.resume_version)
    .bind(application.status.as_str())
    .bind(&application.notes)
    .bind(application.is_marked)
    .bind(application_id)
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(res.rows_affected() == 1)
}

pub async fn delete_owned(
    db: &SqlitePool,
    user_id: i64,
    application_id: i64,
) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM job_applications WHERE id = ? AND user_id = ?")
        .bind(application_id)
        .bind(user_id)
        .execute(db)
        .await?;

    Ok(res.rows_affected() == 1)
}

/// Deletes one id at a time and counts the rows actually removed.
///
/// Not transactional: an error part-way leaves the earlier deletes applied.
pub async fn delete_many_owned(
    db: &SqlitePool,
    user_id: i64,
    application_ids: &[i64],
) -> Result<u64, sqlx::Error> {
    let mut removed = 0;
    for &application_id in application_ids {
        if delete_owned(db, user_id, application_id).await? {
            removed += 1;
        }
    }
    Ok(removed)
}
