//! Informational notices shown on the dashboard.

use serde::{Deserialize, Serialize};

use crate::common::lenient_string;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Notice {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
}
