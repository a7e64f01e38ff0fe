use crate::blob::ImageUpload;
use crate::error::AppError;
use crate::models::NewPost;
use crate::params::PostForm;
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Multipart, Path, Query, Request, rejection::JsonRejection,
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has passed its `validator` rules. Any body that cannot be
/// read as `T` is a validation error.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| AppError::Validation(e.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Integer primary key taken from the `{pk}` path segment.
pub struct Pk(pub i64);

impl<S> FromRequestParts<S> for Pk
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(pk) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        Ok(Self(pk))
    }
}

/// Post fields plus the uploaded image.
///
/// Fields are read from the query string first and then from multipart text
/// parts, so a multipart value overrides a query value. The file part must be
/// named `image`.
pub struct PostUpload {
    pub post: NewPost,
    pub image: ImageUpload,
}

impl<S> FromRequest<S> for PostUpload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut form = PostForm::default();

        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        form.extend(pairs);

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let mut image = None;
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name == "image" {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                image = Some(ImageUpload { filename, bytes });
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                form.push(&name, value);
            }
        }

        let image = image.ok_or_else(|| AppError::validation("image: field required"))?;

        Ok(PostUpload {
            post: form.finish()?,
            image,
        })
    }
}
