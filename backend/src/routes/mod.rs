pub mod authors;
pub mod categories;
pub mod posts;
pub mod tags;

use crate::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .merge(category_routes())
        .merge(author_routes())
        .merge(tag_routes())
        .merge(post_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/category",
            get(categories::get_categories).post(categories::create_category),
        )
        .route("/category/{pk}", get(categories::get_category))
}

pub fn author_routes() -> Router<AppState> {
    Router::new()
        .route("/author", post(authors::create_author))
        .route("/author/{pk}", get(authors::get_author))
}

pub fn tag_routes() -> Router<AppState> {
    Router::new().route("/tag", get(tags::fetch_tags).post(tags::create_tag))
}

pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(posts::create_post))
        .route("/posts/{pk}", get(posts::get_one_post))
}
