// file: src/models/account.rs
// description: account identity attached to every document of a search
// reference: account table keyed by search identifier

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Account table keyed by search identifier.
pub type AccountTable = HashMap<String, AccountInfo>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub account_holder: String,
    pub account_number: String,
}

impl AccountInfo {
    pub fn new(account_holder: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self {
            account_holder: account_holder.into(),
            account_number: account_number.into(),
        }
    }
}

impl From<(String, String)> for AccountInfo {
    fn from((account_holder, account_number): (String, String)) -> Self {
        Self {
            account_holder,
            account_number,
        }
    }
}

impl From<(&str, &str)> for AccountInfo {
    fn from((account_holder, account_number): (&str, &str)) -> Self {
        Self::new(account_holder, account_number)
    }
}
