//! Routing error types.
//!
//! In-app navigation is built from [`Route`](crate::route::Route) values and
//! cannot produce these errors; they surface only at the string boundary
//! (deep-link URIs, CLI arguments).

use thiserror::Error;

/// Errors produced when resolving route strings or deep-link URIs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The route string does not match any registered destination.
    #[error("unknown route: {route}")]
    UnknownRoute {
        /// The route string that failed to resolve
        route: String,
    },

    /// The URI is malformed or uses a scheme other than `rally://`.
    #[error("invalid deep link: {uri}")]
    InvalidDeepLink {
        /// The URI that failed to resolve
        uri: String,
    },
}
