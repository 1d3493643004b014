//! Receivable (income) records.

use chrono::{DateTime, Utc};
use fluxo_shared::types::{Amount, CategoryId, PaymentMethodId, ReceivableId, UserId};
use serde::{Deserialize, Serialize};

use super::category::{CategoryGroup, CategoryRef, PaymentMethodRef};
use super::fields::RecordFields;

/// An income record owed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receivable {
    /// Unique identifier, immutable once created.
    pub id: ReceivableId,
    /// Owning user; every query is scoped to exactly one user.
    pub user_id: UserId,
    /// Free-text description.
    pub description: String,
    /// Monetary amount.
    pub amount: Amount,
    /// Accrual date of the receivable.
    pub receivable_date: Option<DateTime<Utc>>,
    /// Date the money arrived, set only once settled.
    pub receival_date: Option<DateTime<Utc>>,
    /// Whether the money has been received.
    pub received: bool,
    /// Whether the receivable recurs every period.
    pub fixed: bool,
    /// Whether the money arrived through a card.
    pub received_on_card: bool,
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

impl RecordFields for Receivable {
    fn amount(&self) -> Amount {
        self.amount
    }

    fn primary_date(&self) -> Option<DateTime<Utc>> {
        self.receivable_date
    }

    fn secondary_date(&self) -> Option<DateTime<Utc>> {
        self.receival_date
    }

    fn settled(&self) -> bool {
        self.received
    }

    fn fixed(&self) -> bool {
        self.fixed
    }

    fn card_linked(&self) -> bool {
        self.received_on_card
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
