//! HTTP handlers for the poet endpoint.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::lookup::PoetLookup;
use crate::request::Request;
use crate::response::Json;

/// Success body of `GET /poet/{letter}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoetBody {
    pub poet: String,
}

/// `GET /poet/{letter}`
pub async fn get_poet(req: Request, lookup: Arc<PoetLookup>) -> Result<Json<PoetBody>, LookupError> {
    let letter = req.param("letter").unwrap_or_default();
    let poet = lookup.get_poet_by_letter(letter).await?;
    Ok(Json(PoetBody { poet }))
}
