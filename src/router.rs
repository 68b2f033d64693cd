//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path, you
//! get a handler and the shared application state.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;
use percent_encoding::percent_decode_str;

use crate::handler::{BoxedHandler, Handler};

/// Result of matching a method + path against the routing table.
pub(crate) enum Route<S> {
    Found(BoxedHandler<S>, HashMap<String, String>),
    /// The path exists, but not for this method.
    MethodNotAllowed,
    NotFound,
}

/// The application router.
///
/// Built once at startup around the application state `S`; pass it to
/// [`Server::serve`](crate::Server::serve). Each [`Router::on`] call returns
/// `self` so registrations chain naturally.
pub struct Router<S> {
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
    state: Arc<S>,
}

impl<S: Send + Sync + 'static> Router<S> {
    pub fn new(state: S) -> Self {
        Self { routes: HashMap::new(), state: Arc::new(state) }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn state(&self) -> Arc<S> {
        Arc::clone(&self.state)
    }

    /// Param values are percent-decoded; invalid UTF-8 becomes U+FFFD.
    pub(crate) fn lookup(&self, method: &Method, path: &str) -> Route<S> {
        if let Some(matched) = self.routes.get(method).and_then(|tree| tree.at(path).ok()) {
            let handler = Arc::clone(matched.value);
            let params = matched.params.iter()
                .map(|(k, v)| {
                    let value = percent_decode_str(v).decode_utf8_lossy().into_owned();
                    (k.to_owned(), value)
                })
                .collect();
            return Route::Found(handler, params);
        }

        let elsewhere = self.routes.iter()
            .any(|(m, tree)| m != method && tree.at(path).is_ok());
        if elsewhere { Route::MethodNotAllowed } else { Route::NotFound }
    }
}
