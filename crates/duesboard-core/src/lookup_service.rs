//! Member lookups across the open collections.

use duesboard_domain::{DerivedCollection, Roster};

use crate::error::CoreError;

/// Paid/due state of one member in one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDue {
    pub name: String,
    pub paid: bool,
    pub amount_due: f64,
}

/// The answer to "what does member N still owe".
#[derive(Debug, Clone, PartialEq)]
pub struct MemberStatement {
    pub member: u32,
    pub per_collection: Vec<CollectionDue>,
    pub total_due: f64,
}

impl MemberStatement {
    pub fn is_settled(&self) -> bool {
        self.total_due == 0.0
    }
}

/// Answers point lookups against the open partition.
pub struct LookupService;

impl LookupService {
    /// Parses and range-checks a member number against the roster. Lookup
    /// callers validate through this before invoking [`Self::lookup_member`].
    pub fn parse_member(roster: &Roster, input: &str) -> Result<u32, CoreError> {
        input
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| roster.contains(*n))
            .ok_or_else(|| CoreError::MemberOutOfRange {
                input: input.trim().to_string(),
                total: roster.total_children(),
            })
    }

    /// Builds the member's statement across the supplied collections, in
    /// input order. Callers pass the open partition; closed collections
    /// carry no actionable dues and are excluded by design.
    ///
    /// Precondition: `n` is a valid roster member (see [`Self::parse_member`]).
    pub fn lookup_member(n: u32, open_collections: &[DerivedCollection]) -> MemberStatement {
        let mut per_collection = Vec::with_capacity(open_collections.len());
        let mut total_due = 0.0;
        for collection in open_collections {
            let paid = collection.is_paid(n);
            let amount_due = if paid { 0.0 } else { collection.amount_per_child };
            total_due += amount_due;
            per_collection.push(CollectionDue {
                name: collection.name.clone(),
                paid,
                amount_due,
            });
        }
        MemberStatement {
            member: n,
            per_collection,
            total_due,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger_service::LedgerService;
    use duesboard_domain::{Collection, CollectionStatus};

    fn open_partition() -> Vec<DerivedCollection> {
        let roster = Roster::new(5);
        let derived = LedgerService::derive_collections(
            &roster,
            vec![
                Collection::new("Trip", 10.0, CollectionStatus::Open).with_paid(vec![3]),
                Collection::new("Photos", 999.0, CollectionStatus::Closed),
            ],
        );
        let (open, _closed) = LedgerService::partition_by_status(&derived);
        open
    }

    #[test]
    fn only_open_collections_count_toward_dues() {
        let open = open_partition();
        assert_eq!(open.len(), 1, "closed collection must not reach lookup");

        let paid_member = LookupService::lookup_member(3, &open);
        assert!(paid_member.is_settled());
        assert_eq!(paid_member.total_due, 0.0);

        let unpaid_member = LookupService::lookup_member(5, &open);
        assert_eq!(unpaid_member.total_due, 10.0);
        assert_eq!(unpaid_member.per_collection.len(), 1);
        assert!(!unpaid_member.per_collection[0].paid);
        assert_eq!(unpaid_member.per_collection[0].amount_due, 10.0);
    }

    #[test]
    fn statement_rows_follow_collection_order() {
        let roster = Roster::new(2);
        let derived = LedgerService::derive_collections(
            &roster,
            vec![
                Collection::new("First", 5.0, CollectionStatus::Open),
                Collection::new("Second", 7.0, CollectionStatus::Open).with_paid(vec![1]),
            ],
        );
        let statement = LookupService::lookup_member(1, &derived);
        assert_eq!(statement.per_collection[0].name, "First");
        assert_eq!(statement.per_collection[1].name, "Second");
        assert_eq!(statement.total_due, 5.0);
    }

    #[test]
    fn parse_member_accepts_only_roster_numbers() {
        let roster = Roster::new(25);
        assert_eq!(LookupService::parse_member(&roster, " 8 ").unwrap(), 8);
        for bad in ["0", "26", "-1", "2.5", "eight", ""] {
            let err = LookupService::parse_member(&roster, bad)
                .expect_err(&format!("input {bad:?} should be rejected"));
            assert!(format!("{err}").contains("1 to 25"));
        }
    }
}
