use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Blob store error: {0}")]
    Blob(#[from] std::io::Error),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Internal Server Error")]
    Anyhow(#[from] anyhow::Error),
}

impl AppError {
    pub fn category_not_found() -> Self {
        Self::NotFound("Category does not exist")
    }

    pub fn author_not_found() -> Self {
        Self::NotFound("Author does not exist")
    }

    pub fn post_not_found() -> Self {
        Self::NotFound("Post not found")
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Blob(_) | AppError::Anyhow(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::Database(ref e) => {
                tracing::error!(error = ?e, "database error");
                "Something went wrong".to_string()
            }
            AppError::Blob(ref e) => {
                tracing::error!(error = ?e, "blob store error");
                "Something went wrong".to_string()
            }
            AppError::Anyhow(ref e) => {
                tracing::error!(error = ?e, "system error");
                "Something went wrong".to_string()
            }
            AppError::Validation(msg) | AppError::BadRequest(msg) => msg,
            AppError::NotFound(msg) => msg.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
