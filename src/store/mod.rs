mod ledger;

use std::collections::HashSet;

use crate::models::{Transaction, TransactionId, TransactionPatch, TransactionStatus, TransactionType};

pub(crate) use ledger::{export_csv, load_csv};

/// Capability to persist edits to a transaction.
///
/// The edit modal only ever talks to its owner through this trait, so any
/// backing store (in-memory, file, remote) can sit behind it.
pub(crate) trait UpdateTransaction {
    fn update_transaction(&mut self, id: &TransactionId, patch: TransactionPatch)
        -> anyhow::Result<()>;
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum StoreError {
    #[error("no transaction with id '{0}'")]
    NotFound(TransactionId),
    #[error("duplicate transaction id '{0}'")]
    DuplicateId(TransactionId),
}

/// Ordered, in-memory set of transactions owned by the host application.
#[derive(Debug, Default)]
pub(crate) struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub(crate) fn new(transactions: Vec<Transaction>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for txn in &transactions {
            if !seen.insert(&txn.id) {
                return Err(StoreError::DuplicateId(txn.id.clone()));
            }
        }
        Ok(Self { transactions })
    }

    pub(crate) fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    pub(crate) fn get_index(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// A few records so the TUI has something to show without a ledger file.
    pub(crate) fn sample() -> Self {
        let txn = |id: &str,
                   amount: rust_decimal::Decimal,
                   description: &str,
                   kind: TransactionType,
                   counterparty: &str,
                   status: TransactionStatus| {
            let (recipient, sender) = if kind.is_outbound() {
                (Some(counterparty.to_string()), None)
            } else {
                (None, Some(counterparty.to_string()))
            };
            Transaction {
                id: TransactionId::new(id),
                amount,
                description: description.into(),
                recipient,
                sender,
                status,
                kind,
            }
        };

        Self {
            transactions: vec![
                txn(
                    "txn_1",
                    rust_decimal::Decimal::new(425, 1),
                    "Coffee",
                    TransactionType::Sent,
                    "Cafe",
                    TransactionStatus::Completed,
                ),
                txn(
                    "txn_2",
                    rust_decimal::Decimal::new(250000, 2),
                    "Salary",
                    TransactionType::Received,
                    "Acme Corp",
                    TransactionStatus::Completed,
                ),
                txn(
                    "txn_3",
                    rust_decimal::Decimal::new(8999, 2),
                    "Electricity bill",
                    TransactionType::Payment,
                    "City Power",
                    TransactionStatus::Pending,
                ),
                txn(
                    "txn_4",
                    rust_decimal::Decimal::new(1995, 2),
                    "Returned headphones",
                    TransactionType::Refund,
                    "Sound Shop",
                    TransactionStatus::Completed,
                ),
                txn(
                    "txn_5",
                    rust_decimal::Decimal::new(120, 0),
                    "Rent share",
                    TransactionType::Sent,
                    "Alex",
                    TransactionStatus::Failed,
                ),
            ],
        }
    }
}

impl UpdateTransaction for TransactionStore {
    fn update_transaction(
        &mut self,
        id: &TransactionId,
        patch: TransactionPatch,
    ) -> anyhow::Result<()> {
        let txn = self
            .transactions
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        if patch.is_empty() {
            tracing::debug!(%id, "empty patch, nothing to update");
            return Ok(());
        }
        txn.apply(patch);
        tracing::info!(%id, "transaction updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
