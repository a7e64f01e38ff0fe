#![allow(dead_code)]

use async_trait::async_trait;
use blog_backend::blob::{BlobStore, sanitize_filename};
use blog_backend::config::AppConfig;
use blog_backend::db::Store;
use blog_backend::error::AppError;
use blog_backend::repo::Repository;
use blog_backend::{AppState, routes};
use axum::Router;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, Bytes>>,
}

impl MemoryBlobStore {
    pub fn get(&self, name: &str) -> Option<Bytes> {
        self.blobs.lock().unwrap().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.blobs.lock().unwrap().len()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, filename: &str, bytes: Bytes) -> Result<String, AppError> {
        let name = sanitize_filename(filename)?;
        self.blobs.lock().unwrap().insert(name.to_string(), bytes);
        Ok(format!("images/{name}"))
    }
}

pub async fn repository() -> (Repository, Arc<MemoryBlobStore>) {
    let store = Store::open_in_memory().await.unwrap();
    let blobs = Arc::new(MemoryBlobStore::default());
    (Repository::new(store, blobs.clone()), blobs)
}

pub async fn app() -> (Router, Arc<MemoryBlobStore>) {
    let store = Store::open_in_memory().await.unwrap();
    let blobs = Arc::new(MemoryBlobStore::default());
    let state = AppState::new(store, blobs.clone(), AppConfig::default());
    (routes::create_router(state), blobs)
}
