//! # poet-lookup
//!
//! Ask for a letter, get a poet. One route, one upstream call.
//!
//! `GET /poet/{letter}` fetches the PoetryDB author listing and answers with
//! the first author whose name starts with `letter`:
//!
//! | Outcome | Status | Body |
//! |---|---|---|
//! | match | 200 | `{"poet": "Angelou, Maya"}` |
//! | not exactly one ASCII letter | 400 | `{"detail": "Input must be a single English letter."}` |
//! | no author with that initial | 404 | `{"detail": "No poet found with that initial."}` |
//! | PoetryDB failed or timed out | 500 | `{"detail": "Error fetching data from PoetryDB."}` |
//! | PoetryDB sent something else | 500 | `{"detail": "Malformed response from PoetryDB."}` |
//!
//! The HTTP layer is a small hyper server with a `matchit` router, built to
//! sit behind a reverse proxy that handles TLS and rate limiting.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use poet_lookup::{PoetLookup, PoetryDb, Server, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), poet_lookup::Error> {
//!     let source = PoetryDb::new("https://poetrydb.org/author", Duration::from_secs(10))?;
//!     Server::bind("0.0.0.0:8000").await?.serve(app(PoetLookup::new(source))).await
//! }
//! ```

mod error;
mod handler;
mod letter;
mod lookup;
mod request;
mod response;
mod router;
mod server;
mod upstream;

pub mod config;
pub mod health;
pub mod logging;
pub mod routes;

pub use config::{Config, LogFormat};
pub use error::{Error, LookupError};
pub use handler::Handler;
pub use letter::Letter;
pub use lookup::{PoetLookup, first_match};
pub use request::Request;
pub use response::{IntoResponse, Json, Response};
pub use router::Router;
pub use server::Server;
pub use upstream::{AuthorSource, POETRYDB_AUTHOR_URL, PoetryDb, UpstreamError, parse_authors};

use http::Method;

/// The service's routing table.
pub fn app(lookup: PoetLookup) -> Router<PoetLookup> {
    Router::new(lookup)
        .on(Method::GET, "/poet/{letter}", routes::get_poet)
        .on(Method::GET, "/healthz", health::liveness::<PoetLookup>)
}
