//! # Rally App - Headless Application Core
//!
//! Portable, UI-free core for the Rally finance demo. Frontends import the
//! route registry and navigation state from here and keep rendering concerns
//! to themselves.
//!
//! ## Module Organization
//!
//! - **destinations**: the fixed destination registry and tab resolution
//! - **route**: canonical route build/parse pair and deep-link resolution
//! - **navigator**: owned back-stack with single-top navigation policy
//! - **data**: the demo dataset (accounts, bills)
//! - **errors**: routing error types
//!
//! ## Architecture
//!
//! Navigation state lives in an explicit, owned back-stack rather than in a
//! toolkit-provided controller:
//!
//! ```text
//! tab intent ──> Navigator::navigate_single_top ──> back-stack mutation
//!                                                        │
//!                         watch::Receiver<Route> <───────┘
//!                         (tab row + host re-derive from it)
//! ```
//!
//! All mutation goes through [`Navigator`]; the watch channel is the single
//! reactive subscription point.

pub mod data;
pub mod destinations;
pub mod errors;
pub mod navigator;
pub mod route;

pub use data::{Account, Bill, UserData};
pub use destinations::{resolve_current_tab, Destination};
pub use errors::RouteError;
pub use navigator::{BackStackEntry, Navigator, ScreenMemory};
pub use route::{route_table, Route, RouteTableEntry, DEEP_LINK_SCHEME};
