//! Bill (expense) records.

use chrono::{DateTime, Utc};
use fluxo_shared::types::{Amount, BillId, CategoryId, PaymentMethodId, UserId};
use serde::{Deserialize, Serialize};

use super::category::{CategoryGroup, CategoryRef, PaymentMethodRef};
use super::fields::RecordFields;

/// An expense record owed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    /// Unique identifier, immutable once created.
    pub id: BillId,
    /// Owning user; every query is scoped to exactly one user.
    pub user_id: UserId,
    /// Free-text description.
    pub description: String,
    /// Monetary amount.
    pub amount: Amount,
    /// Due date of the bill.
    pub bill_date: Option<DateTime<Utc>>,
    /// Date the bill was paid, set only once settled.
    pub pay_date: Option<DateTime<Utc>>,
    /// Whether the bill has been paid.
    pub paid_out: bool,
    /// Whether the bill recurs every period.
    pub fixed: bool,
    /// Whether the bill was paid with a card.
    pub paid_with_card: bool,
    /// Category classification.
    pub category: CategoryRef,
    /// Category group.
    pub category_group: CategoryGroup,
    /// Payment method.
    pub payment_method: PaymentMethodRef,
    /// Creation timestamp, the store's native sort key.
    pub created_at: DateTime<Utc>,
    /// Last edit timestamp, `None` until first edit.
    pub updated_at: Option<DateTime<Utc>>,
}

impl RecordFields for Bill {
    fn amount(&self) -> Amount {
        self.amount
    }

    fn primary_date(&self) -> Option<DateTime<Utc>> {
        self.bill_date
    }

    fn secondary_date(&self) -> Option<DateTime<Utc>> {
        self.pay_date
    }

    fn settled(&self) -> bool {
        self.paid_out
    }

    fn fixed(&self) -> bool {
        self.fixed
    }

    fn card_linked(&self) -> bool {
        self.paid_with_card
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category_id(&self) -> CategoryId {
        self.category.id
    }

    fn category_group(&self) -> CategoryGroup {
        self.category_group
    }

    fn payment_method_id(&self) -> PaymentMethodId {
        self.payment_method.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
