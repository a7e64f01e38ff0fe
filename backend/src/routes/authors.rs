use crate::{
    error::AppError,
    extractors::{Pk, ValidatedJson},
    models::{NewAuthor, User},
    repo::Repository,
};
use axum::{Json, extract::State};

pub async fn create_author(
    State(repo): State<Repository>,
    ValidatedJson(payload): ValidatedJson<NewAuthor>,
) -> Result<Json<User>, AppError> {
    let author = repo.create_author(payload).await?;
    Ok(Json(author))
}

pub async fn get_author(
    State(repo): State<Repository>,
    Pk(pk): Pk,
) -> Result<Json<User>, AppError> {
    Ok(Json(repo.get_author(pk).await?))
}
