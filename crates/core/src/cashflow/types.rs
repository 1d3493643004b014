//! Cash-flow report types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income, expense and profit totals for one calendar month.
///
/// `general_*` sums cover every record whose primary date falls in the
/// month; `paid_*` sums only the settled ones. Profits are incomes minus
/// expenses and may be negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// Calendar year of the bucket.
    pub year: i32,
    /// Calendar month of the bucket, 1 through 12.
    pub month: u32,
    /// Sum of all receivable amounts in the month.
    pub general_incomes: Decimal,
    /// Sum of received receivable amounts in the month.
    pub paid_incomes: Decimal,
    /// Sum of all bill amounts in the month.
    pub general_expenses: Decimal,
    /// Sum of paid bill amounts in the month.
    pub paid_expenses: Decimal,
    /// `general_incomes - general_expenses`.
    pub general_profit: Decimal,
    /// `paid_incomes - paid_expenses`.
    pub paid_profit: Decimal,
}

impl MonthSummary {
    /// A summary with every sum at zero.
    #[must_use]
    pub const fn empty(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            general_incomes: Decimal::ZERO,
            paid_incomes: Decimal::ZERO,
            general_expenses: Decimal::ZERO,
            paid_expenses: Decimal::ZERO,
            general_profit: Decimal::ZERO,
            paid_profit: Decimal::ZERO,
        }
    }
}
