use serde::{Deserialize, Serialize};

/// The category of a ledger transaction.
///
/// `Incoming` and `Payment` are both money received for an invoice (the
/// platform historically used two names for the same flow); `Refund` is money
/// returned to a client; `Withdrawal` is money moved out to a bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Incoming,
    Payment,
    Refund,
    Withdrawal,
}

impl TransactionType {
    /// The string stored in the ledger's `type` column. The repository binds
    /// these values into its queries; no SQL spells them out by hand.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Incoming => "incoming",
            TransactionType::Payment => "payment",
            TransactionType::Refund => "refund",
            TransactionType::Withdrawal => "withdrawal",
        }
    }
}

/// The lifecycle state of a ledger transaction. Reports only ever read
/// `Completed` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    /// The string stored in the ledger's `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
        }
    }
}
