//! Cross-entity rules on top of the store.
//!
//! Every write validates its input first. Post creation resolves author and
//! category by identity and tags by name; unknown tag names are dropped.
//!
//! The image is stored before the post row is written and is not removed if
//! the post write fails afterwards.

use crate::blob::{BlobStore, ImageUpload};
use crate::db::Store;
use crate::error::AppError;
use crate::models::{
    Category, NewAuthor, NewCategory, NewPost, NewTag, PostDetail, PostRecord, Tag, User,
};
use std::sync::Arc;
use validator::Validate;

#[derive(Clone)]
pub struct Repository {
    store: Store,
    blobs: Arc<dyn BlobStore>,
}

impl Repository {
    pub fn new(store: Store, blobs: Arc<dyn BlobStore>) -> Self {
        Self { store, blobs }
    }

    pub async fn create_category(&self, input: NewCategory) -> Result<Category, AppError> {
        input.validate()?;
        let category = self.store.insert_category(&input.name).await?;
        tracing::info!(category_id = category.id, "category created");
        Ok(category)
    }

    pub async fn create_author(&self, input: NewAuthor) -> Result<User, AppError> {
        input.validate()?;
        let user = self.store.insert_user(&input.username).await?;
        tracing::info!(user_id = user.id, "author created");
        Ok(user)
    }

    pub async fn create_tag(&self, input: NewTag) -> Result<Tag, AppError> {
        input.validate()?;
        let tag = self.store.insert_tag(&input.name).await?;
        tracing::info!(tag_id = tag.id, "tag created");
        Ok(tag)
    }

    #[tracing::instrument(skip(self, input, image), fields(filename = %image.filename))]
    pub async fn create_post(
        &self,
        input: NewPost,
        image: ImageUpload,
    ) -> Result<PostDetail, AppError> {
        input.validate()?;

        let image_ref = self.blobs.put(&image.filename, image.bytes).await?;

        let category = self
            .store
            .get_category(input.category_id)
            .await?
            .ok_or_else(AppError::category_not_found)?;
        let author = self
            .store
            .get_user(input.author_id)
            .await?
            .ok_or_else(AppError::author_not_found)?;

        let mut tags: Vec<Tag> = Vec::with_capacity(input.tags.len());
        for name in &input.tags {
            match self.store.find_tag_by_name(name).await? {
                Some(tag) if tags.iter().any(|t| t.id == tag.id) => {}
                Some(tag) => tags.push(tag),
                None => tracing::debug!(tag = %name, "unknown tag dropped"),
            }
        }
        tags.sort_by_key(|t| t.id);

        let record = PostRecord {
            name: &input.name,
            description: &input.description,
            image: &image_ref,
            author_id: author.id,
            category_id: category.id,
        };
        let tag_ids: Vec<i64> = tags.iter().map(|t| t.id).collect();
        let post = self.store.insert_post(&record, &tag_ids).await?;

        tracing::info!(post_id = post.id, tags = tags.len(), "post created");

        Ok(PostDetail {
            post,
            author,
            category,
            tags,
        })
    }

    pub async fn get_category(&self, id: i64) -> Result<Category, AppError> {
        self.store
            .get_category(id)
            .await?
            .ok_or_else(AppError::category_not_found)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.store.list_categories().await?)
    }

    pub async fn get_author(&self, id: i64) -> Result<User, AppError> {
        self.store
            .get_user(id)
            .await?
            .ok_or_else(AppError::author_not_found)
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>, AppError> {
        Ok(self.store.list_tags().await?)
    }

    pub async fn get_post(&self, id: i64) -> Result<PostDetail, AppError> {
        let post = self
            .store
            .get_post(id)
            .await?
            .ok_or_else(AppError::post_not_found)?;

        // Foreign keys guarantee both rows while the post exists.
        let author = self
            .store
            .get_user(post.author_id)
            .await?
            .ok_or_else(AppError::author_not_found)?;
        let category = self
            .store
            .get_category(post.category_id)
            .await?
            .ok_or_else(AppError::category_not_found)?;
        let tags = self.store.list_post_tags(post.id).await?;

        Ok(PostDetail {
            post,
            author,
            category,
            tags,
        })
    }
}
