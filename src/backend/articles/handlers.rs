//! Read-only article feed.

use axum::{extract::Path, Json};
use serde_json::Value;

use super::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::DbConn;

pub async fn list_articles(DbConn(mut conn): DbConn) -> Result<Json<Vec<Value>>, BackendError> {
    Ok(Json(db::list_articles(&mut conn).await?))
}

pub async fn get_article(
    DbConn(mut conn): DbConn,
    Path(article_id): Path<String>,
) -> Result<Json<Value>, BackendError> {
    db::get_article(&mut conn, &article_id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found("Article not found."))
}
