// File: src/request.rs
// Purpose: Build RawValues straight from an axum request

use crate::raw::RawValues;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body values come first, then URL query values, so a body value wins a
/// lookup for the same key. The body is only read for urlencoded requests.
#[async_trait]
impl<S> FromRequest<S> for RawValues
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().map(str::to_owned);
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.starts_with(FORM_CONTENT_TYPE))
            .unwrap_or(false);

        let mut raw = if is_form {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            RawValues::from_urlencoded_bytes(&body)
        } else {
            RawValues::new()
        };

        if let Some(query) = query {
            raw.extend_urlencoded(&query);
        }

        tracing::trace!(keys = raw.len(), is_form, "decoded request form values");
        Ok(raw)
    }
}
