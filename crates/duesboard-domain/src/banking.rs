//! Payment details for the group account.

use serde::{Deserialize, Serialize};

use crate::common::{lenient_opt_string, lenient_string};

/// Transfer title used when the banking document does not provide one.
/// `{nr}` is substituted with the member number.
pub const DEFAULT_TRANSFER_TITLE_TEMPLATE: &str = "Group dues - member {nr}";

const MEMBER_NUMBER_PLACEHOLDER: &str = "{nr}";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankingDetails {
    #[serde(default, deserialize_with = "lenient_string")]
    pub account_number: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub blik: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub revolut: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub transfer_title_template: Option<String>,
}

impl BankingDetails {
    pub fn template(&self) -> &str {
        self.transfer_title_template
            .as_deref()
            .filter(|template| !template.trim().is_empty())
            .unwrap_or(DEFAULT_TRANSFER_TITLE_TEMPLATE)
    }

    /// Renders the transfer title for a member number.
    pub fn transfer_title(&self, n: u32) -> String {
        self.template()
            .replace(MEMBER_NUMBER_PLACEHOLDER, &n.to_string())
    }
}
