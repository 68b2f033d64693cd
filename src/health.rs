//! Liveness probe.
//!
//! ```rust,ignore
//! Router::new(state).on(Method::GET, "/healthz", health::liveness);
//! ```
//!
//! Does not call PoetryDB; upstream outages show up as 500s on `/poet`.

use std::sync::Arc;

use serde::Serialize;

use crate::request::Request;
use crate::response::Json;

#[derive(Debug, Clone, Serialize)]
pub struct HealthBody {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Always `200 OK` while the process can answer HTTP.
pub async fn liveness<S>(_req: Request, _state: Arc<S>) -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
