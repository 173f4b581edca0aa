/**
 * User Repository
 *
 * Database operations for the `users` table. Every function borrows the
 * request's connection; multi-statement operations run in a transaction on
 * it.
 *
 * `email` carries a UNIQUE constraint, so the subscribe upsert cannot create
 * two users for one address even when requests race.
 */

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::{Connection, SqliteConnection};
use uuid::Uuid;

use crate::shared::user::{dedupe_topics, merge_topics};
use crate::shared::User;

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: String,
    email: String,
    topics: Json<Vec<String>>,
    preferences: Json<Map<String, Value>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            user_id: row.user_id,
            email: row.email,
            topics: row.topics.0,
            preferences: row.preferences.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Outcome of [`subscribe`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subscription {
    /// A new user was stored under this identifier
    Created(String),
    /// The email already belonged to this user; topics were merged
    Existing(String),
}

impl Subscription {
    pub fn user_id(&self) -> &str {
        match self {
            Self::Created(id) | Self::Existing(id) => id,
        }
    }
}

/// Insert a user, or merge `topics` into the user already holding `email`
///
/// The insert is attempted first so the transaction takes the write lock up
/// front; if the email is taken the existing row is updated in the same
/// transaction. `preferences` only apply to a newly created user.
pub async fn subscribe(
    conn: &mut SqliteConnection,
    email: &str,
    topics: &[String],
    preferences: &Map<String, Value>,
) -> Result<Subscription, sqlx::Error> {
    let mut tx = conn.begin().await?;

    let user_id = Uuid::new_v4().to_string();
    let now = Utc::now();
    let inserted = sqlx::query(
        r#"
        INSERT INTO users (user_id, email, topics, preferences, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind(&user_id)
    .bind(email)
    .bind(Json(dedupe_topics(topics.iter().cloned())))
    .bind(Json(preferences))
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if inserted == 1 {
        tx.commit().await?;
        return Ok(Subscription::Created(user_id));
    }

    let (existing_id, Json(current)) = sqlx::query_as::<_, (String, Json<Vec<String>>)>(
        "SELECT user_id, topics FROM users WHERE email = ?1",
    )
    .bind(email)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE users SET topics = ?1, updated_at = ?2 WHERE user_id = ?3")
        .bind(Json(merge_topics(current, topics)))
        .bind(Utc::now())
        .bind(&existing_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(Subscription::Existing(existing_id))
}

/// Get user by ID
pub async fn get_user_by_id(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT user_id, email, topics, preferences, created_at, updated_at
        FROM users
        WHERE user_id = ?1
        "#,
    )
    .bind(user_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(User::from))
}

/// Get user by email
pub async fn get_user_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT user_id, email, topics, preferences, created_at, updated_at
        FROM users
        WHERE email = ?1
        "#,
    )
    .bind(email)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(User::from))
}

/// Replace whichever of `topics` / `preferences` is supplied
///
/// # Returns
/// `false` if no user has this identifier
pub async fn update_user(
    conn: &mut SqliteConnection,
    user_id: &str,
    topics: Option<&[String]>,
    preferences: Option<&Map<String, Value>>,
) -> Result<bool, sqlx::Error> {
    let topics = topics.map(|topics| Json(dedupe_topics(topics.iter().cloned())));

    let result = sqlx::query(
        r#"
        UPDATE users
        SET topics = COALESCE(?1, topics),
            preferences = COALESCE(?2, preferences),
            updated_at = ?3
        WHERE user_id = ?4
        "#,
    )
    .bind(topics)
    .bind(preferences.map(Json))
    .bind(Utc::now())
    .bind(user_id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a user
///
/// # Returns
/// `false` if no user has this identifier
pub async fn delete_user(conn: &mut SqliteConnection, user_id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE user_id = ?1")
        .bind(user_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
