//! Incomes outside the collections, and expenses paid from the treasury.

use serde::{Deserialize, Serialize};

use crate::common::{lenient_amount, lenient_opt_string, lenient_string, Amounted};

/// Label used for incomes with no source given.
pub const DEFAULT_INCOME_SOURCE: &str = "Other";

/// A one-off income that did not come through a collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Income {
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
}

impl Income {
    pub fn display_source(&self) -> &str {
        if self.source.trim().is_empty() {
            DEFAULT_INCOME_SOURCE
        } else {
            &self.source
        }
    }
}

impl Amounted for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// A single expense row. The date stays a raw ISO-ish string so malformed
/// entries still render; ordering compares the raw text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub what: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub receipt: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub receipt_note: Option<String>,
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}
