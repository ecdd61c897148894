//! Axum extractors for request parameters

use crate::error::ParamsRejection;
use async_trait::async_trait;
use axum::extract::{FromRequest, Query, Request};
use axum::http::{header, Uri};
use axum::{Form, Json};
use replykit_core::Params;
use serde_json::{Map, Value};

/// Axum extractor for required-parameter checks
///
/// Captures the request's query string as a string map and, when the
/// request carries a JSON or urlencoded-form body, the parsed body map.
/// A body pins itself as the only source consulted by
/// [`Params::require`], even when it parses to an empty map; the query is
/// used for body-less requests only.
///
/// # Example
///
/// ```ignore
/// use axum::{routing::post, Router};
/// use replykit_http::{ok, ReplyJson, RequestParams};
/// use serde_json::json;
///
/// async fn handler(RequestParams(params): RequestParams) -> Result<ReplyJson, ReplyJson> {
///     params.require(&["username", "password"])?;
///     Ok(ok(json!({ "message": "ok" })))
/// }
///
/// let app = Router::new().route("/signup", post(handler));
/// ```
pub struct RequestParams(pub Params);

#[async_trait]
impl<S> FromRequest<S> for RequestParams
where
    S: Send + Sync,
{
    type Rejection = ParamsRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = query_map(req.uri())?;

        let body = match body_kind(&req) {
            BodyKind::Json => {
                let Json(value) = Json::<Value>::from_request(req, state)
                    .await
                    .map_err(|e| ParamsRejection::ParseError(e.to_string()))?;
                match value {
                    Value::Object(map) => Some(map),
                    _ => return Err(ParamsRejection::NonObjectBody),
                }
            }
            BodyKind::Form => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|e| ParamsRejection::ParseError(e.to_string()))?;
                Some(
                    pairs
                        .into_iter()
                        .map(|(k, v)| (k, Value::String(v)))
                        .collect(),
                )
            }
            BodyKind::None => None,
        };

        Ok(RequestParams(Params { body, query }))
    }
}

enum BodyKind {
    Json,
    Form,
    None,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    // Ignore any charset suffix
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        "application/json" => BodyKind::Json,
        "application/x-www-form-urlencoded" => BodyKind::Form,
        _ => BodyKind::None,
    }
}

fn query_map(uri: &Uri) -> Result<Map<String, Value>, ParamsRejection> {
    if uri.query().is_none() {
        return Ok(Map::new());
    }

    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map_err(|e| ParamsRejection::QueryError(e.to_string()))?;

    Ok(pairs
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect())
}
