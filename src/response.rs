//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Every body this service sends is JSON, so the builders here are JSON
//! builders. Handlers return anything that implements [`IntoResponse`]; the
//! dispatcher turns it into a hyper response.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use http::{HeaderMap, StatusCode};
use http_body_util::Full;
use serde::Serialize;

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// ```rust
/// use http::StatusCode;
/// use poet_lookup::Response;
///
/// Response::json(StatusCode::OK, &serde_json::json!({ "poet": "Blake, William" }));
/// Response::detail(StatusCode::NOT_FOUND, "Not Found");
/// Response::status(StatusCode::NO_CONTENT);
/// ```
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    /// Serialises `value` as an `application/json` body.
    ///
    /// A value that fails to serialise is a bug in the caller's type; it is
    /// logged and answered with an empty `500`.
    pub fn json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => {
                let mut headers = HeaderMap::new();
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Self { status, headers, body: Bytes::from(body) }
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to serialise response body");
                Self::status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    /// `{"detail": "<message>"}` with the given status.
    pub fn detail(status: StatusCode, detail: &str) -> Self {
        Self::json(status, &Detail { detail })
    }

    /// Response with no body.
    pub fn status(status: StatusCode) -> Self {
        Self { status, headers: HeaderMap::new(), body: Bytes::new() }
    }

    pub fn status_code(&self) -> StatusCode { self.status }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut response = http::Response::new(Full::new(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

/// Error body shape shared by every non-2xx reply.
#[derive(Debug, Serialize)]
struct Detail<'a> {
    detail: &'a str,
}

// ── Json ──────────────────────────────────────────────────────────────────────

/// `200 OK` with `T` serialised as JSON.
///
/// ```rust,ignore
/// async fn get_poet(_req: Request, _state: Arc<PoetLookup>) -> Json<PoetBody> {
///     Json(PoetBody { poet: "Auden, W. H.".into() })
/// }
/// ```
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        Response::json(StatusCode::OK, &self.0)
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Implement on your own types to return them directly from handlers.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

/// Return a bare status from a handler: `return StatusCode::NO_CONTENT`
impl IntoResponse for StatusCode {
    fn into_response(self) -> Response { Response::status(self) }
}

/// `Ok` and `Err` each render themselves, so handlers can use `?`.
impl<T, E> IntoResponse for Result<T, E>
where
    T: IntoResponse,
    E: IntoResponse,
{
    fn into_response(self) -> Response {
        match self {
            Ok(v) => v.into_response(),
            Err(e) => e.into_response(),
        }
    }
}
