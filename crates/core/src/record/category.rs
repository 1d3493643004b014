//! Category and payment method classification for records.

use fluxo_shared::types::{CategoryId, PaymentMethodId};
use serde::{Deserialize, Serialize};

/// Broad grouping a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGroup {
    /// Recurring living costs: housing, utilities, groceries.
    Essentials,
    /// Discretionary spending: dining out, subscriptions, travel.
    Lifestyle,
    /// Transfers into savings or investment accounts.
    Savings,
    /// Salary and other money coming in.
    Income,
    /// Anything that fits nowhere else.
    Other,
}

/// Well-known category codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Rent, mortgage and home maintenance.
    Housing,
    /// Groceries and restaurants.
    Food,
    /// Fuel, fares and vehicle costs.
    Transport,
    /// Power, water, internet and phone.
    Utilities,
    /// Entertainment and leisure.
    Leisure,
    /// Medical and insurance costs.
    Health,
    /// Wages and recurring income.
    Salary,
    /// Uncategorized.
    Other,
}

/// Category attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Category identifier.
    pub id: CategoryId,
    /// Human-readable description.
    pub description: String,
    /// Well-known category code.
    pub kind: CategoryKind,
}

/// Well-known payment method codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodKind {
    /// Physical cash.
    Cash,
    /// Debit card.
    DebitCard,
    /// Credit card.
    CreditCard,
    /// Bank transfer.
    BankTransfer,
    /// Instant payment (Pix).
    Pix,
}

/// Payment method attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodRef {
    /// Payment method identifier.
    pub id: PaymentMethodId,
    /// Human-readable description.
    pub description: String,
    /// Well-known payment method code.
    pub kind: PaymentMethodKind,
}
