use anyhow::{Context, Result};
use std::path::Path;

use super::TransactionStore;
use crate::models::Transaction;

/// Read a ledger CSV with header `id,amount,description,recipient,sender,status,type`.
/// Empty recipient/sender cells load as absent.
pub(crate) fn load_csv(path: &Path) -> Result<TransactionStore> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open ledger: {}", path.display()))?;

    let mut transactions = Vec::new();
    for (i, result) in rdr.deserialize::<Transaction>().enumerate() {
        // Row 1 is the header
        let txn = result.with_context(|| format!("Invalid ledger row {}", i + 2))?;
        transactions.push(txn);
    }

    let store = TransactionStore::new(transactions)
        .with_context(|| format!("Invalid ledger: {}", path.display()))?;
    tracing::info!(path = %path.display(), count = store.len(), "ledger loaded");
    Ok(store)
}

/// Write every transaction in `store` to `path`. Returns the number of rows written.
pub(crate) fn export_csv(store: &TransactionStore, path: &Path) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut count = 0;
    for txn in store.iter() {
        wtr.serialize(txn)
            .with_context(|| format!("Failed to write transaction {}", txn.id))?;
        count += 1;
    }
    wtr.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    tracing::info!(path = %path.display(), count, "ledger exported");
    Ok(count)
}
