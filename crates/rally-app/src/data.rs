//! # Demo Dataset
//!
//! Already-shaped data consumed by the screens. Owned types (String, Vec)
//! keep the set portable across frontends.

use serde::{Deserialize, Serialize};

/// An account with its running balance
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Display name; doubles as the detail route's `account_type` argument
    pub name: String,
    /// Account number
    pub number: u64,
    /// Current balance
    pub balance: f64,
}

impl Account {
    /// Create an account
    pub fn new(name: impl Into<String>, number: u64, balance: f64) -> Self {
        Self {
            name: name.into(),
            number,
            balance,
        }
    }

    /// Last four digits of the account number, for list rows
    pub fn number_suffix(&self) -> String {
        format!("{:04}", self.number % 10_000)
    }
}

/// A bill with its due date
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Payee name
    pub name: String,
    /// Human-readable due date
    pub due: String,
    /// Amount due
    pub amount: f64,
}

impl Bill {
    /// Create a bill
    pub fn new(name: impl Into<String>, due: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            due: due.into(),
            amount,
        }
    }
}

/// The demo dataset backing every screen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    /// Accounts, in display order
    pub accounts: Vec<Account>,
    /// Bills, in due-date order
    pub bills: Vec<Bill>,
}

impl Default for UserData {
    fn default() -> Self {
        Self::demo()
    }
}

impl UserData {
    /// The Rally study's demo accounts and bills
    pub fn demo() -> Self {
        Self {
            accounts: vec![
                Account::new("Checking", 1_234_565_434, 2215.13),
                Account::new("Home Savings", 5_434_354_343, 8676.88),
                Account::new("Car Savings", 9_876_543_210, 987.48),
                Account::new("Vacation", 9_876_543_210, 253.00),
            ],
            bills: vec![
                Bill::new("RedPay Credit", "Jan 29", 45.36),
                Bill::new("Rent", "Feb 9", 1200.00),
                Bill::new("TabFine Credit", "Feb 22", 87.33),
                Bill::new("ABC Loans", "Feb 29", 400.00),
            ],
        }
    }

    /// Sum of all account balances
    pub fn total_balance(&self) -> f64 {
        self.accounts.iter().map(|a| a.balance).sum()
    }

    /// Sum of all bill amounts
    pub fn total_due(&self) -> f64 {
        self.bills.iter().map(|b| b.amount).sum()
    }

    /// Account looked up by name
    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.name == name)
    }

    /// The account a detail render falls back to when no argument was
    /// supplied: the first account in the set.
    pub fn default_account(&self) -> Option<&Account> {
        self.accounts.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_account_is_first() {
        let data = UserData::demo();
        assert_eq!(data.default_account().map(|a| a.name.as_str()), Some("Checking"));
    }

    #[test]
    fn test_account_lookup_by_name() {
        let data = UserData::demo();
        assert!(data.account_by_name("Vacation").is_some());
        assert!(data.account_by_name("Retirement").is_none());
    }

    #[test]
    fn test_number_suffix_keeps_leading_zeros() {
        let account = Account::new("Test", 1_000_000_0042, 1.0);
        assert_eq!(account.number_suffix(), "0042");
    }
}
