//! Full-screen views, one per destination, plus the app shell.

mod accounts;
mod app;
mod bills;
mod overview;
mod single_account;

pub use accounts::{AccountRow, AccountsScreen};
pub use app::{run_app, RallyApp};
pub use bills::{BillRow, BillsScreen};
pub use overview::{AlertCard, OverviewScreen};
pub use single_account::{resolve_account, SingleAccountScreen};
