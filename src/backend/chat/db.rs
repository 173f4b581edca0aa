/**
 * Database Operations for Chat Sessions
 *
 * Sessions are stored one row each, with their messages embedded as a JSON
 * array. Messages are appended with `json_insert(.., '$[#]', ..)` so the
 * array is never read back and rewritten.
 */

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{Connection, SqliteConnection};
use uuid::Uuid;

use crate::shared::{ChatMessage, Session};

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: String,
    user_id: String,
    title: String,
    created_at: DateTime<Utc>,
    messages: Json<Vec<ChatMessage>>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Self {
            session_id: row.session_id,
            user_id: row.user_id,
            title: row.title,
            created_at: row.created_at,
            messages: row.messages.0,
        }
    }
}

/// Store a new session with no messages
///
/// `user_id` is not checked against the users table.
pub async fn create_session(
    conn: &mut SqliteConnection,
    user_id: &str,
    title: &str,
) -> Result<Session, sqlx::Error> {
    let session = Session {
        session_id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        title: title.to_string(),
        created_at: Utc::now(),
        messages: Vec::new(),
    };

    sqlx::query(
        r#"
        INSERT INTO sessions (session_id, user_id, title, created_at, messages)
        VALUES (?1, ?2, ?3, ?4, '[]')
        "#,
    )
    .bind(&session.session_id)
    .bind(&session.user_id)
    .bind(&session.title)
    .bind(session.created_at)
    .execute(&mut *conn)
    .await?;

    Ok(session)
}

/// Every session belonging to `user_id`, oldest first
pub async fn list_sessions_for_user(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Vec<Session>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SessionRow>(
        r#"
        SELECT session_id, user_id, title, created_at, messages
        FROM sessions
        WHERE user_id = ?1
        ORDER BY pk ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows.into_iter().map(Session::from).collect())
}

/// Messages of a session in append order
///
/// # Returns
/// `None` if the session does not exist
pub async fn get_messages(
    conn: &mut SqliteConnection,
    session_id: &str,
) -> Result<Option<Vec<ChatMessage>>, sqlx::Error> {
    let messages = sqlx::query_scalar::<_, Json<Vec<ChatMessage>>>(
        "SELECT messages FROM sessions WHERE session_id = ?1",
    )
    .bind(session_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(messages.map(|Json(messages)| messages))
}

/// Append `messages` to a session, in order, in one transaction
///
/// # Returns
/// `false` (and nothing written) if the session does not exist
pub async fn append_messages(
    conn: &mut SqliteConnection,
    session_id: &str,
    messages: &[ChatMessage],
) -> Result<bool, sqlx::Error> {
    let mut tx = conn.begin().await?;

    for message in messages {
        let result = sqlx::query(
            r#"
            UPDATE sessions
            SET messages = json_insert(messages, '$[#]', json(?1))
            WHERE session_id = ?2
            "#,
        )
        .bind(Json(message))
        .bind(session_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }
    }

    tx.commit().await?;
    Ok(true)
}
