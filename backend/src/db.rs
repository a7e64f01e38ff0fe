use crate::config::AppConfig;
use crate::models::{Category, Post, PostRecord, Tag, User};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Handle over the relational store. Cloning shares the same pool.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    // Connect to the database file and execute any migrations
    pub async fn open(config: &AppConfig) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        let store = Self { pool };
        if config.run_migrations {
            store.migrate().await?;
        }
        tracing::info!(database_url = %config.database_url, "store opened");

        Ok(store)
    }

    /// Opens a private in-memory database with the schema applied.
    ///
    /// Every pooled connection to `:memory:` would see its own database, so
    /// the pool is pinned to a single connection that never expires.
    pub async fn open_in_memory() -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("migrations executed");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("store closed");
    }

    pub async fn insert_user(&self, username: &str) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>("INSERT INTO users (username) VALUES (?) RETURNING id, username")
            .bind(username)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn get_user(&self, id: i64) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn insert_category(&self, name: &str) -> sqlx::Result<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn get_category(&self, id: i64) -> sqlx::Result<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list_categories(&self) -> sqlx::Result<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn insert_tag(&self, name: &str) -> sqlx::Result<Tag> {
        sqlx::query_as::<_, Tag>("INSERT INTO tags (name) VALUES (?) RETURNING id, name")
            .bind(name)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn list_tags(&self) -> sqlx::Result<Vec<Tag>> {
        sqlx::query_as::<_, Tag>("SELECT id, name FROM tags ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    /// Tag names are not unique; the oldest tag with the name wins.
    pub async fn find_tag_by_name(&self, name: &str) -> sqlx::Result<Option<Tag>> {
        sqlx::query_as::<_, Tag>("SELECT id, name FROM tags WHERE name = ? ORDER BY id LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
    }

    /// Writes the post row and one association row per tag in a single
    /// transaction.
    pub async fn insert_post(&self, record: &PostRecord<'_>, tag_ids: &[i64]) -> sqlx::Result<Post> {
        let mut tx = self.pool.begin().await?;

        let post = sqlx::query_as::<_, Post>(
            r#"
                INSERT INTO posts (
                    name,
                    description,
                    image,
                    author_id,
                    category_id
                ) VALUES (?, ?, ?, ?, ?)
                RETURNING
                    id,
                    name,
                    description,
                    image,
                    author_id,
                    category_id
            "#,
        )
        .bind(record.name)
        .bind(record.description)
        .bind(record.image)
        .bind(record.author_id)
        .bind(record.category_id)
        .fetch_one(&mut *tx)
        .await?;

        for tag_id in tag_ids {
            sqlx::query("INSERT OR IGNORE INTO posts_tags (posts_id, tag_id) VALUES (?, ?)")
                .bind(post.id)
                .bind(*tag_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(post)
    }

    pub async fn get_post(&self, id: i64) -> sqlx::Result<Option<Post>> {
        sqlx::query_as::<_, Post>(
            "SELECT id, name, description, image, author_id, category_id FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Attaches a tag to a post. Attaching the same pair twice is a no-op.
    pub async fn add_post_tag(&self, post_id: i64, tag_id: i64) -> sqlx::Result<()> {
        sqlx::query("INSERT OR IGNORE INTO posts_tags (posts_id, tag_id) VALUES (?, ?)")
            .bind(post_id)
            .bind(tag_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn list_post_tags(&self, post_id: i64) -> sqlx::Result<Vec<Tag>> {
        sqlx::query_as::<_, Tag>(
            r#"
            SELECT tags.id, tags.name
            FROM tags
            JOIN posts_tags ON posts_tags.tag_id = tags.id
            WHERE posts_tags.posts_id = ?
            ORDER BY tags.id
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_rows_are_absent_not_errors() {
        let store = Store::open_in_memory().await.unwrap();
        assert!(store.get_category(42).await.unwrap().is_none());
        assert!(store.get_user(42).await.unwrap().is_none());
        assert!(store.get_post(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let store = Store::open_in_memory().await.unwrap();
        store.insert_category("Tech").await.unwrap();
        store.migrate().await.unwrap();
        assert_eq!(store.list_categories().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn association_pairs_are_unique() {
        let store = Store::open_in_memory().await.unwrap();
        let user = store.insert_user("alice").await.unwrap();
        let category = store.insert_category("Tech").await.unwrap();
        let tag = store.insert_tag("rust").await.unwrap();
        let record = PostRecord {
            name: "Hello",
            description: "world",
            image: "images/a.png",
            author_id: user.id,
            category_id: category.id,
        };

        let post = store.insert_post(&record, &[tag.id, tag.id]).await.unwrap();
        store.add_post_tag(post.id, tag.id).await.unwrap();

        assert_eq!(store.list_post_tags(post.id).await.unwrap(), vec![tag]);
    }

    #[tokio::test]
    async fn identities_are_not_reused() {
        let store = Store::open_in_memory().await.unwrap();
        let first = store.insert_tag("a").await.unwrap();
        sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(first.id)
            .execute(&store.pool)
            .await
            .unwrap();
        let second = store.insert_tag("b").await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let store = Store::open_in_memory().await.unwrap();
        let record = PostRecord {
            name: "Hello",
            description: "world",
            image: "images/a.png",
            author_id: 7,
            category_id: 9,
        };
        assert!(store.insert_post(&record, &[]).await.is_err());
    }
}
