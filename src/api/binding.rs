//! Extractors that bind raw request data into typed records. Any rejection
//! becomes `AppError::BadRequest`, so malformed input never reaches a handler body.

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::{Form, FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Path segments, e.g. the `{id}` of `/todo/{id}`.
pub struct PathParams<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest)?;
        Ok(Self(value))
    }
}

/// The query string.
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) =
            Query::<T>::try_from_uri(&parts.uri).map_err(|_| AppError::BadRequest)?;
        Ok(Self(value))
    }
}

/// The request body when one is sent, otherwise the query string. A body is
/// read as a urlencoded form when `Content-Type` says so and as JSON otherwise.
pub struct BodyOrQuery<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

impl<T, S> FromRequest<S> for BodyOrQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let form = is_form(&req);
        let method = req.method().clone();
        let uri = req.uri().clone();
        let headers = req.headers().clone();
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::BadRequest)?;

        if body.iter().all(u8::is_ascii_whitespace) {
            let Query(value) = Query::<T>::try_from_uri(&uri).map_err(|_| AppError::BadRequest)?;
            return Ok(Self(value));
        }

        if form {
            let mut req = Request::new(Body::from(body));
            *req.method_mut() = method;
            *req.uri_mut() = uri;
            *req.headers_mut() = headers;
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|_| AppError::BadRequest)?;
            return Ok(Self(value));
        }

        let Json(value) = Json::<T>::from_bytes(&body).map_err(|_| AppError::BadRequest)?;
        Ok(Self(value))
    }
}
