/**
 * Article Repository
 *
 * Articles are opaque JSON documents written by the ingestion side and
 * served unchanged. The only field the backend relies on is a string `id`,
 * copied into `article_id` for lookups.
 */

use serde_json::Value;
use sqlx::types::Json;
use sqlx::SqliteConnection;
use thiserror::Error;

use crate::shared::SharedError;

/// Failures of [`insert_article`]
#[derive(Debug, Error)]
pub enum ArticleError {
    /// The document has no usable `id`
    #[error(transparent)]
    InvalidDocument(#[from] SharedError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// The document's `id`, which must be a non-empty string
pub fn article_id(document: &Value) -> Result<&str, SharedError> {
    document
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| SharedError::validation("id", "article documents need a string id"))
}

/// Store an article, replacing any earlier document with the same `id`
///
/// # Returns
/// The article's `id`
pub async fn insert_article(
    conn: &mut SqliteConnection,
    document: &Value,
) -> Result<String, ArticleError> {
    let id = article_id(document)?;

    sqlx::query(
        r#"
        INSERT INTO articles (article_id, document)
        VALUES (?1, ?2)
        ON CONFLICT (article_id) DO UPDATE SET document = excluded.document
        "#,
    )
    .bind(id)
    .bind(Json(document))
    .execute(&mut *conn)
    .await?;

    Ok(id.to_string())
}

/// Every article in insertion order
pub async fn list_articles(conn: &mut SqliteConnection) -> Result<Vec<Value>, sqlx::Error> {
    let documents = sqlx::query_scalar::<_, Json<Value>>("SELECT document FROM articles ORDER BY pk ASC")
        .fetch_all(&mut *conn)
        .await?;

    Ok(documents.into_iter().map(|Json(document)| document).collect())
}

pub async fn get_article(
    conn: &mut SqliteConnection,
    article_id: &str,
) -> Result<Option<Value>, sqlx::Error> {
    let document = sqlx::query_scalar::<_, Json<Value>>(
        "SELECT document FROM articles WHERE article_id = ?1",
    )
    .bind(article_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(document.map(|Json(document)| document))
}
