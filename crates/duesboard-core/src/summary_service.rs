//! Aggregation of collection income, other income, and expenses.

use duesboard_domain::{Amounted, DerivedCollection, Expense, Income};

/// Balance addends, kept separate so the presentation layer can render the
/// breakdown alongside the net value.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceBreakdown {
    pub from_collections: f64,
    pub other_income: f64,
    pub total_expenses: f64,
}

impl BalanceBreakdown {
    /// Net treasury balance.
    pub fn balance(&self) -> f64 {
        self.from_collections + self.other_income - self.total_expenses
    }
}

/// Aggregates derived collections and cashflow records into totals.
pub struct SummaryService;

impl SummaryService {
    /// Sums collected amounts, other incomes, and expenses. Each amount is
    /// coerced to a non-negative finite number; anything else counts as 0.
    pub fn balance_breakdown(
        collections: &[DerivedCollection],
        incomes: &[Income],
        expenses: &[Expense],
    ) -> BalanceBreakdown {
        BalanceBreakdown {
            from_collections: collections
                .iter()
                .map(|entry| sanitize_amount(entry.collected_amount))
                .sum(),
            other_income: total_amount(incomes),
            total_expenses: total_amount(expenses),
        }
    }

    /// Net balance over the same inputs.
    pub fn balance(
        collections: &[DerivedCollection],
        incomes: &[Income],
        expenses: &[Expense],
    ) -> f64 {
        Self::balance_breakdown(collections, incomes, expenses).balance()
    }
}

fn total_amount<T: Amounted>(items: &[T]) -> f64 {
    items.iter().map(|item| sanitize_amount(item.amount())).sum()
}

fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
