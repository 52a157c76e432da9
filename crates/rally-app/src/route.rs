//! # Routes
//!
//! Canonical route build/parse pair and deep-link resolution.
//!
//! A [`Route`] is a fully-resolved navigation target: the destination plus
//! any argument it carries. Route strings and deep-link URIs both resolve
//! through [`Route::parse`], so in-app navigation and external links cannot
//! drift apart.

use serde::{Deserialize, Serialize};

use crate::destinations::Destination;
use crate::errors::RouteError;

/// URI scheme accepted by [`Route::parse_deep_link`]
pub const DEEP_LINK_SCHEME: &str = "rally";

/// Name of the detail route's argument, as it appears in route templates
pub const ACCOUNT_TYPE_ARG: &str = "account_type";

/// A fully-resolved navigation target.
///
/// The detail route's argument is optional: rendering with the argument
/// absent is a defined state (the screen falls back to its own default), not
/// an error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Financial overview (the start destination)
    Overview,
    /// Account balances
    Accounts,
    /// Upcoming bills
    Bills,
    /// Single-account detail, optionally scoped to one account
    SingleAccount {
        /// Account selected in a list screen, absent for the bare route
        account_type: Option<String>,
    },
}

impl Default for Route {
    fn default() -> Self {
        Route::START
    }
}

impl Route {
    /// The start destination; the back-stack is seeded with it and the
    /// initial displayed route is always this one.
    pub const START: Route = Route::Overview;

    /// Build the detail route for a selected account
    pub fn single_account(account_type: impl Into<String>) -> Self {
        Route::SingleAccount {
            account_type: Some(account_type.into()),
        }
    }

    /// The destination this route resolves to
    pub fn destination(&self) -> Destination {
        match self {
            Route::Overview => Destination::Overview,
            Route::Accounts => Destination::Accounts,
            Route::Bills => Destination::Bills,
            Route::SingleAccount { .. } => Destination::SingleAccount,
        }
    }

    /// Canonical route string (`overview`, `single_account/Checking`, ...)
    pub fn path(&self) -> String {
        match self {
            Route::SingleAccount {
                account_type: Some(account),
            } => format!("{}/{}", Destination::SingleAccount.route(), account),
            _ => self.destination().route().to_string(),
        }
    }

    /// Look up an argument value by name, mirroring the route template's
    /// argument mapping. Only the detail route carries one.
    pub fn argument(&self, name: &str) -> Option<&str> {
        match self {
            Route::SingleAccount {
                account_type: Some(account),
            } if name == ACCOUNT_TYPE_ARG => Some(account),
            _ => None,
        }
    }

    /// Parse a canonical route string. Inverse of [`Route::path`].
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let unknown = || RouteError::UnknownRoute {
            route: raw.to_string(),
        };

        let (base, arg) = match raw.split_once('/') {
            Some((base, arg)) => (base, Some(arg)),
            None => (raw, None),
        };

        match (base, arg) {
            ("overview", None) => Ok(Route::Overview),
            ("accounts", None) => Ok(Route::Accounts),
            ("bills", None) => Ok(Route::Bills),
            ("single_account", None) => Ok(Route::SingleAccount { account_type: None }),
            ("single_account", Some(account)) if !account.is_empty() && !account.contains('/') => {
                Ok(Route::single_account(account))
            }
            _ => Err(unknown()),
        }
    }

    /// Resolve a `rally://` deep-link URI to the same route an in-app
    /// navigation would produce.
    pub fn parse_deep_link(uri: &str) -> Result<Self, RouteError> {
        let invalid = || RouteError::InvalidDeepLink {
            uri: uri.to_string(),
        };

        let prefix = format!("{DEEP_LINK_SCHEME}://");
        let path = uri.strip_prefix(&prefix).ok_or_else(invalid)?;
        if path.is_empty() {
            return Err(invalid());
        }
        Route::parse(path)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// One row of the static route table, as exposed to tooling
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteTableEntry {
    /// Stable route identifier
    pub route: &'static str,
    /// Route template (argument placeholder included for the detail route)
    pub template: String,
    /// Argument name, when the route takes one
    pub argument: Option<&'static str>,
    /// Deep-link URI pattern, when the route advertises one
    pub deep_link: Option<String>,
}

/// The static route table, one entry per registered destination
pub fn route_table() -> Vec<RouteTableEntry> {
    let detail = Destination::SingleAccount.route();
    vec![
        RouteTableEntry {
            route: Destination::Overview.route(),
            template: Destination::Overview.route().to_string(),
            argument: None,
            deep_link: None,
        },
        RouteTableEntry {
            route: Destination::Accounts.route(),
            template: Destination::Accounts.route().to_string(),
            argument: None,
            deep_link: None,
        },
        RouteTableEntry {
            route: Destination::Bills.route(),
            template: Destination::Bills.route().to_string(),
            argument: None,
            deep_link: None,
        },
        RouteTableEntry {
            route: detail,
            template: format!("{detail}/{{{ACCOUNT_TYPE_ARG}}}"),
            argument: Some(ACCOUNT_TYPE_ARG),
            deep_link: Some(format!(
                "{DEEP_LINK_SCHEME}://{detail}/{{{ACCOUNT_TYPE_ARG}}}"
            )),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("overview").unwrap(), Route::Overview);
        assert_eq!(Route::parse("accounts").unwrap(), Route::Accounts);
        assert_eq!(Route::parse("bills").unwrap(), Route::Bills);
    }

    #[test]
    fn test_parse_detail_route_with_argument() {
        let route = Route::parse("single_account/Checking").unwrap();
        assert_eq!(route, Route::single_account("Checking"));
        assert_eq!(route.argument(ACCOUNT_TYPE_ARG), Some("Checking"));
    }

    #[test]
    fn test_parse_bare_detail_route_has_no_argument() {
        let route = Route::parse("single_account").unwrap();
        assert_eq!(route, Route::SingleAccount { account_type: None });
        assert_eq!(route.argument(ACCOUNT_TYPE_ARG), None);
    }

    #[test]
    fn test_path_is_inverse_of_parse() {
        for raw in ["overview", "accounts", "bills", "single_account/Vacation"] {
            assert_eq!(Route::parse(raw).unwrap().path(), raw);
        }
    }

    #[test]
    fn test_unknown_route_is_an_error() {
        assert_matches!(
            Route::parse("settings"),
            Err(RouteError::UnknownRoute { route }) if route == "settings"
        );
        assert_matches!(Route::parse(""), Err(RouteError::UnknownRoute { .. }));
        assert_matches!(
            Route::parse("single_account/a/b"),
            Err(RouteError::UnknownRoute { .. })
        );
        assert_matches!(
            Route::parse("overview/extra"),
            Err(RouteError::UnknownRoute { .. })
        );
    }

    #[test]
    fn test_deep_link_matches_in_app_route() {
        let from_uri = Route::parse_deep_link("rally://single_account/Savings").unwrap();
        let in_app = Route::single_account("Savings");
        assert_eq!(from_uri, in_app);
    }

    #[test]
    fn test_deep_link_without_argument() {
        let route = Route::parse_deep_link("rally://single_account").unwrap();
        assert_eq!(route, Route::SingleAccount { account_type: None });
    }

    #[test]
    fn test_deep_link_rejects_other_schemes() {
        assert_matches!(
            Route::parse_deep_link("http://single_account/Checking"),
            Err(RouteError::InvalidDeepLink { .. })
        );
        assert_matches!(
            Route::parse_deep_link("rally://"),
            Err(RouteError::InvalidDeepLink { .. })
        );
        assert_matches!(
            Route::parse_deep_link("single_account/Checking"),
            Err(RouteError::InvalidDeepLink { .. })
        );
    }

    #[test]
    fn test_route_table_covers_every_destination_once() {
        let table = route_table();
        assert_eq!(table.len(), 4);
        let mut routes: Vec<_> = table.iter().map(|e| e.route).collect();
        routes.sort_unstable();
        routes.dedup();
        assert_eq!(routes.len(), 4);

        let detail = table.iter().find(|e| e.route == "single_account").unwrap();
        assert_eq!(detail.template, "single_account/{account_type}");
        assert_eq!(
            detail.deep_link.as_deref(),
            Some("rally://single_account/{account_type}")
        );
    }
}
