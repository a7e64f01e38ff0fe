pub mod blob;
pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod models;
pub mod params;
pub mod repo;
pub mod routes;

use crate::blob::BlobStore;
use crate::config::AppConfig;
use crate::db::Store;
use crate::repo::Repository;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Repository,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: Store, blobs: Arc<dyn BlobStore>, config: AppConfig) -> Self {
        Self {
            repo: Repository::new(store, blobs),
            config,
        }
    }
}

impl FromRef<AppState> for Repository {
    fn from_ref(state: &AppState) -> Self {
        state.repo.clone()
    }
}
