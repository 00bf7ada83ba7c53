use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Sent,
    Received,
    Payment,
    Refund,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sent => "Sent",
            Self::Received => "Received",
            Self::Payment => "Payment",
            Self::Refund => "Refund",
        }
    }

    /// Selector order.
    pub fn all() -> &'static [TransactionType] {
        &[Self::Sent, Self::Received, Self::Payment, Self::Refund]
    }

    /// Money leaving the account; the counterparty is a recipient.
    pub fn is_outbound(&self) -> bool {
        matches!(self, Self::Sent | Self::Payment)
    }

    /// Money entering the account; the counterparty is a sender.
    pub fn is_inbound(&self) -> bool {
        matches!(self, Self::Received | Self::Refund)
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| *t == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| *t == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
