//! Derivation of per-collection payment state.

use duesboard_domain::{Collection, DerivedCollection, Roster};

/// Turns raw collection records into derived payment state.
///
/// Every operation is a pure transformation: malformed fields normalize to
/// safe defaults, nothing raises, and input order is preserved.
pub struct LedgerService;

impl LedgerService {
    /// Derives payment state for every collection against the roster.
    pub fn derive_collections(roster: &Roster, raw: Vec<Collection>) -> Vec<DerivedCollection> {
        raw.into_iter()
            .map(|collection| DerivedCollection::from_raw(collection, roster))
            .collect()
    }

    /// Splits collections into open and closed, preserving input order
    /// within each partition. Open means the literal `open` status; every
    /// other value counts as closed.
    pub fn partition_by_status(
        derived: &[DerivedCollection],
    ) -> (Vec<DerivedCollection>, Vec<DerivedCollection>) {
        derived
            .iter()
            .cloned()
            .partition(DerivedCollection::is_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duesboard_domain::CollectionStatus;

    fn collection(name: &str, amount: f64, status: CollectionStatus, paid: Vec<i64>) -> Collection {
        Collection::new(name, amount, status).with_paid(paid)
    }

    #[test]
    fn paid_numbers_are_unique_sorted_and_in_range() {
        let roster = Roster::new(5);
        let derived = LedgerService::derive_collections(
            &roster,
            vec![collection(
                "Trip",
                10.0,
                CollectionStatus::Open,
                vec![4, 2, 2, 0, -3, 4, 9, 1],
            )],
        );
        assert_eq!(derived[0].paid_numbers, vec![1, 2, 4]);
        assert_eq!(derived[0].unpaid_numbers, vec![3, 5]);
    }

    #[test]
    fn paid_and_unpaid_counts_cover_the_roster() {
        let roster = Roster::new(7);
        let derived = LedgerService::derive_collections(
            &roster,
            vec![
                collection("A", 5.0, CollectionStatus::Open, vec![1, 2, 3]),
                collection("B", 5.0, CollectionStatus::Closed, vec![]),
            ],
        );
        for entry in &derived {
            assert_eq!(entry.paid_count + entry.unpaid_count, 7);
            assert_eq!(
                entry.unpaid_numbers.len() + entry.paid_numbers.len(),
                7,
                "unpaid must be the roster minus paid"
            );
        }
    }

    #[test]
    fn collected_amount_is_exact_for_cent_multiples() {
        let roster = Roster::new(30);
        let derived = LedgerService::derive_collections(
            &roster,
            vec![collection(
                "Photos",
                12.25,
                CollectionStatus::Open,
                (1..=20).collect(),
            )],
        );
        assert_eq!(derived[0].collected_amount, 20.0 * 12.25);
    }

    #[test]
    fn partition_keeps_input_order_and_sends_missing_status_to_closed() {
        let roster = Roster::new(3);
        let derived = LedgerService::derive_collections(
            &roster,
            vec![
                collection("First open", 1.0, CollectionStatus::Open, vec![]),
                collection("Default status", 1.0, CollectionStatus::default(), vec![]),
                collection("Second open", 1.0, CollectionStatus::Open, vec![]),
                collection("Closed", 1.0, CollectionStatus::Closed, vec![]),
            ],
        );
        let (open, closed) = LedgerService::partition_by_status(&derived);
        let names = |entries: &[DerivedCollection]| {
            entries.iter().map(|c| c.name.clone()).collect::<Vec<_>>()
        };
        assert_eq!(names(&open), vec!["First open", "Second open"]);
        assert_eq!(names(&closed), vec!["Default status", "Closed"]);
    }

    #[test]
    fn empty_roster_still_derives() {
        let roster = Roster::new(0);
        let derived = LedgerService::derive_collections(
            &roster,
            vec![collection("Trip", 10.0, CollectionStatus::Open, vec![1])],
        );
        assert_eq!(derived[0].paid_count, 0);
        assert_eq!(derived[0].unpaid_count, 0);
        assert_eq!(derived[0].collected_amount, 0.0);
    }
}
