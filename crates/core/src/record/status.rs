//! Derived payment status.
//!
//! The status is never stored. It is computed on demand from the settled
//! flag and the record's due date, relative to a reference day in the
//! reporting timezone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Settlement status of a bill or receivable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// The record has been settled.
    Paid,
    /// Unsettled and due on the reference day.
    DueToday,
    /// Unsettled and due before the reference day.
    Overdue,
    /// Unsettled with a future or missing due date.
    Pending,
}

impl PaymentStatus {
    /// Derives the status from the settled flag and the local due date.
    ///
    /// A settled record is `Paid` regardless of its dates. A record
    /// without a due date cannot be late, so it stays `Pending`.
    #[must_use]
    pub fn derive(settled: bool, due_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        if settled {
            return Self::Paid;
        }
        match due_date {
            Some(due) if due == today => Self::DueToday,
            Some(due) if due < today => Self::Overdue,
            _ => Self::Pending,
        }
    }
}
