//! Site metadata and the roster of valid member numbers.

use serde::{Deserialize, Serialize};

use crate::common::{lenient_count, lenient_string};

/// Dashboard title shown when the site document does not provide one.
pub const DEFAULT_SITE_TITLE: &str = "Group dues";

/// Top-level metadata from the site document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(
        default,
        rename = "totalChildren",
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_children: Option<u32>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: String::new(),
            total_children: None,
        }
    }
}

impl SiteInfo {
    /// Returns the configured title, falling back to the default.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            DEFAULT_SITE_TITLE
        } else {
            &self.title
        }
    }
}

/// The fixed-size domain of valid member numbers, `1..=total_children`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    total_children: u32,
}

impl Roster {
    pub fn new(total_children: u32) -> Self {
        Self { total_children }
    }

    pub fn total_children(&self) -> u32 {
        self.total_children
    }

    pub fn is_empty(&self) -> bool {
        self.total_children == 0
    }

    /// Reports whether `n` is a valid member number.
    pub fn contains(&self, n: u32) -> bool {
        n >= 1 && n <= self.total_children
    }

    /// Iterates every member number in ascending order.
    pub fn member_numbers(&self) -> impl Iterator<Item = u32> {
        1..=self.total_children
    }
}
