use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{TransactionStatus, TransactionType};

/// Opaque record key. Never parsed or ordered, only compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    // Read from the cell text; csv would otherwise go through f64 first
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub description: String,
    pub recipient: Option<String>,
    pub sender: Option<String>,
    pub status: TransactionStatus,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    /// The counterparty that matters for this record's type.
    pub fn counterparty(&self) -> Option<&str> {
        if self.kind.is_outbound() {
            self.recipient.as_deref()
        } else {
            self.sender.as_deref()
        }
    }

    /// Applies every field present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(recipient) = patch.recipient {
            self.recipient = recipient;
        }
        if let Some(sender) = patch.sender {
            self.sender = sender;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
    }
}

/// Partial update for a [`Transaction`].
///
/// `None` leaves a field alone. For the optional counterparty fields,
/// `Some(None)` removes the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub recipient: Option<Option<String>>,
    pub sender: Option<Option<String>>,
    pub status: Option<TransactionStatus>,
    pub kind: Option<TransactionType>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
