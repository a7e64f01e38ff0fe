use crate::{
    error::AppError,
    extractors::{Pk, ValidatedJson},
    models::{Category, NewCategory},
    repo::Repository,
};
use axum::{Json, extract::State};

pub async fn create_category(
    State(repo): State<Repository>,
    ValidatedJson(payload): ValidatedJson<NewCategory>,
) -> Result<Json<Category>, AppError> {
    let category = repo.create_category(payload).await?;
    Ok(Json(category))
}

pub async fn get_categories(
    State(repo): State<Repository>,
) -> Result<Json<Vec<Category>>, AppError> {
    Ok(Json(repo.list_categories().await?))
}

pub async fn get_category(
    State(repo): State<Repository>,
    Pk(pk): Pk,
) -> Result<Json<Category>, AppError> {
    Ok(Json(repo.get_category(pk).await?))
}
