use crate::{
    error::AppError,
    extractors::{Pk, PostUpload},
    models::{PostDetail, Tag},
    repo::Repository,
};
use axum::{Json, extract::State};
use serde::Serialize;

#[derive(Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category_id: i64,
    pub author_id: i64,
    pub tags: Vec<Tag>,
}

impl From<PostDetail> for PostResponse {
    fn from(detail: PostDetail) -> Self {
        Self {
            id: detail.post.id,
            name: detail.post.name,
            description: detail.post.description,
            category_id: detail.category.id,
            author_id: detail.author.id,
            tags: detail.tags,
        }
    }
}

#[derive(Serialize)]
pub struct CreatedPostResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category_id: i64,
    pub author_id: i64,
    pub tags: Vec<Tag>,
}

impl From<PostDetail> for CreatedPostResponse {
    fn from(detail: PostDetail) -> Self {
        Self {
            id: detail.post.id,
            name: detail.post.name,
            description: detail.post.description,
            image: detail.post.image,
            category_id: detail.category.id,
            author_id: detail.author.id,
            tags: detail.tags,
        }
    }
}

pub async fn create_post(
    State(repo): State<Repository>,
    upload: PostUpload,
) -> Result<Json<CreatedPostResponse>, AppError> {
    let detail = repo.create_post(upload.post, upload.image).await?;
    Ok(Json(detail.into()))
}

pub async fn get_one_post(
    State(repo): State<Repository>,
    Pk(pk): Pk,
) -> Result<Json<PostResponse>, AppError> {
    let detail = repo.get_post(pk).await?;
    Ok(Json(detail.into()))
}
