use crate::{
    error::AppError,
    extractors::ValidatedJson,
    models::{NewTag, Tag},
    repo::Repository,
};
use axum::{Json, extract::State};

// Duplicate names are accepted; each call creates a new tag.
pub async fn create_tag(
    State(repo): State<Repository>,
    ValidatedJson(payload): ValidatedJson<NewTag>,
) -> Result<Json<Tag>, AppError> {
    let tag = repo.create_tag(payload).await?;
    Ok(Json(tag))
}

pub async fn fetch_tags(State(repo): State<Repository>) -> Result<Json<Vec<Tag>>, AppError> {
    Ok(Json(repo.list_tags().await?))
}
