//! Fundraising collections and their derived payment state.

use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};

use serde_json::Value;

use crate::common::{lenient_amount, lenient_numbers, lenient_string};
use crate::site::Roster;

/// Lifecycle state of a collection. Only the literal `"open"` counts as
/// open; every other value, including a missing field, reads as closed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CollectionStatus {
    Open,
    Closed,
}

impl CollectionStatus {
    pub fn from_str(value: &str) -> Self {
        match value.trim() {
            "open" => CollectionStatus::Open,
            _ => CollectionStatus::Closed,
        }
    }
}

impl Default for CollectionStatus {
    fn default() -> Self {
        CollectionStatus::Closed
    }
}

impl fmt::Display for CollectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CollectionStatus::Open => "open",
            CollectionStatus::Closed => "closed",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for CollectionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .and_then(Value::as_str)
            .map(CollectionStatus::from_str)
            .unwrap_or_default())
    }
}

/// One fundraising round as it appears in the collections document.
/// The paid list may still contain duplicates and out-of-range numbers;
/// range normalization happens during derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(
        default,
        rename = "amountPerChild",
        deserialize_with = "lenient_amount"
    )]
    pub amount_per_child: f64,
    #[serde(default)]
    pub status: CollectionStatus,
    #[serde(default, rename = "paid", deserialize_with = "lenient_numbers")]
    pub paid: Vec<i64>,
}

impl Collection {
    pub fn new(name: impl Into<String>, amount_per_child: f64, status: CollectionStatus) -> Self {
        Self {
            name: name.into(),
            amount_per_child,
            status,
            paid: Vec::new(),
        }
    }

    pub fn with_paid(mut self, paid: Vec<i64>) -> Self {
        self.paid = paid;
        self
    }
}

/// A collection with its payment state resolved against a roster.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DerivedCollection {
    pub name: String,
    pub amount_per_child: f64,
    pub status: CollectionStatus,
    /// Unique member numbers inside the roster, ascending.
    pub paid_numbers: Vec<u32>,
    pub paid_count: u32,
    pub unpaid_count: u32,
    pub collected_amount: f64,
    /// Roster numbers with no payment recorded, ascending.
    pub unpaid_numbers: Vec<u32>,
}

impl DerivedCollection {
    /// Normalizes a raw collection against the roster and computes the
    /// derived payment state. Out-of-range and duplicate paid entries are
    /// dropped, a non-finite or negative amount reads as zero.
    pub fn from_raw(raw: Collection, roster: &Roster) -> Self {
        let mut paid_numbers: Vec<u32> = raw
            .paid
            .iter()
            .filter_map(|n| u32::try_from(*n).ok())
            .filter(|n| roster.contains(*n))
            .collect();
        paid_numbers.sort_unstable();
        paid_numbers.dedup();

        let amount_per_child = if raw.amount_per_child.is_finite() && raw.amount_per_child > 0.0 {
            raw.amount_per_child
        } else {
            0.0
        };

        let paid_count = paid_numbers.len() as u32;
        let unpaid_count = roster.total_children() - paid_count;
        let collected_amount = f64::from(paid_count) * amount_per_child;
        let unpaid_numbers = roster
            .member_numbers()
            .filter(|n| paid_numbers.binary_search(n).is_err())
            .collect();

        Self {
            name: raw.name,
            amount_per_child,
            status: raw.status,
            paid_numbers,
            paid_count,
            unpaid_count,
            collected_amount,
            unpaid_numbers,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == CollectionStatus::Open
    }

    /// Reports whether the given member has paid into this collection.
    pub fn is_paid(&self, n: u32) -> bool {
        self.paid_numbers.binary_search(&n).is_ok()
    }

    /// Roster size this collection was derived against.
    pub fn roster_size(&self) -> u32 {
        self.paid_count + self.unpaid_count
    }

    /// Share of the roster that has paid, rounded to whole percent.
    pub fn paid_percent(&self) -> u32 {
        let total = self.roster_size();
        if total == 0 {
            0
        } else {
            ((f64::from(self.paid_count) / f64::from(total)) * 100.0).round() as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_leniently() {
        assert_eq!(CollectionStatus::from_str("open"), CollectionStatus::Open);
        for other in ["closed", "OPEN", "done", ""] {
            assert_eq!(
                CollectionStatus::from_str(other),
                CollectionStatus::Closed,
                "input: {other:?}"
            );
        }
    }

    #[test]
    fn missing_status_deserializes_as_closed() {
        let collection: Collection =
            serde_json::from_str(r#"{"name": "Trip", "amountPerChild": 10}"#).unwrap();
        assert_eq!(collection.status, CollectionStatus::Closed);
    }

    #[test]
    fn wrong_typed_fields_normalize_instead_of_failing() {
        let collection: Collection =
            serde_json::from_str(r#"{"name": 5, "amountPerChild": "x", "status": 1, "paid": "no"}"#)
                .unwrap();
        assert_eq!(collection.name, "5");
        assert_eq!(collection.amount_per_child, 0.0);
        assert_eq!(collection.status, CollectionStatus::Closed);
        assert!(collection.paid.is_empty());
    }

    #[test]
    fn derivation_normalizes_duplicates_and_range() {
        let roster = Roster::new(3);
        let raw = Collection::new("Trip", 10.0, CollectionStatus::Open).with_paid(vec![1, 1, 2, 5]);
        let derived = DerivedCollection::from_raw(raw, &roster);
        assert_eq!(derived.paid_numbers, vec![1, 2]);
        assert_eq!(derived.unpaid_numbers, vec![3]);
        assert_eq!(derived.paid_count, 2);
        assert_eq!(derived.unpaid_count, 1);
        assert_eq!(derived.collected_amount, 20.0);
    }

    #[test]
    fn negative_amount_reads_as_zero() {
        let roster = Roster::new(2);
        let raw = Collection::new("Misc", -4.0, CollectionStatus::Open).with_paid(vec![1]);
        let derived = DerivedCollection::from_raw(raw, &roster);
        assert_eq!(derived.amount_per_child, 0.0);
        assert_eq!(derived.collected_amount, 0.0);
    }

    #[test]
    fn empty_roster_derives_empty_state() {
        let roster = Roster::new(0);
        let raw = Collection::new("Trip", 10.0, CollectionStatus::Open).with_paid(vec![1, 2]);
        let derived = DerivedCollection::from_raw(raw, &roster);
        assert!(derived.paid_numbers.is_empty());
        assert!(derived.unpaid_numbers.is_empty());
        assert_eq!(derived.paid_percent(), 0);
    }
}
