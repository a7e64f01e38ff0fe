use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// A post row as stored, with its relations held as identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub author_id: i64,
    pub category_id: i64,
}

/// A post with author, category and tags resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    pub post: Post,
    pub author: User,
    pub category: Category,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCategory {
    #[validate(length(min = 1, max = 212))]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewAuthor {
    #[validate(length(max = 212))]
    pub username: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTag {
    #[validate(length(max = 212))]
    pub name: String,
}

#[derive(Debug, Clone, Validate)]
pub struct NewPost {
    #[validate(length(max = 212))]
    pub name: String,
    pub description: String,
    pub category_id: i64,
    pub author_id: i64,
    /// Names of existing tags to attach. Unknown names are dropped.
    pub tags: Vec<String>,
}

/// Column values for a post insert, after references are resolved.
#[derive(Debug, Clone)]
pub struct PostRecord<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub image: &'a str,
    pub author_id: i64,
    pub category_id: i64,
}
