#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;
use std::str::FromStr;

use super::*;

fn txn(id: &str) -> Transaction {
    Transaction {
        id: TransactionId::new(id),
        amount: dec!(10),
        description: "Lunch".into(),
        recipient: Some("Deli".into()),
        sender: None,
        status: TransactionStatus::Completed,
        kind: TransactionType::Sent,
    }
}

// ── TransactionStore ──────────────────────────────────────────

#[test]
fn test_new_rejects_duplicate_ids() {
    let err = TransactionStore::new(vec![txn("a"), txn("b"), txn("a")]).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId(id) if id.as_str() == "a"));
}

#[test]
fn test_get_by_id() {
    let store = TransactionStore::new(vec![txn("a"), txn("b")]).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(&TransactionId::new("b")).unwrap().id.as_str(), "b");
    assert!(store.get(&TransactionId::new("z")).is_none());
}

#[test]
fn test_update_applies_patch() {
    let mut store = TransactionStore::new(vec![txn("a")]).unwrap();
    let id = TransactionId::new("a");
    store
        .update_transaction(
            &id,
            TransactionPatch {
                amount: Some(dec!(99.95)),
                recipient: Some(None),
                kind: Some(TransactionType::Payment),
                ..Default::default()
            },
        )
        .unwrap();
    let updated = store.get(&id).unwrap();
    assert_eq!(updated.amount, dec!(99.95));
    assert_eq!(updated.recipient, None);
    assert_eq!(updated.kind, TransactionType::Payment);
    assert_eq!(updated.description, "Lunch");
}

#[test]
fn test_update_unknown_id_fails() {
    let mut store = TransactionStore::new(vec![txn("a")]).unwrap();
    let err = store
        .update_transaction(&TransactionId::new("nope"), TransactionPatch::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "no transaction with id 'nope'");
}

#[test]
fn test_update_keeps_order() {
    let mut store = TransactionStore::new(vec![txn("a"), txn("b"), txn("c")]).unwrap();
    store
        .update_transaction(
            &TransactionId::new("b"),
            TransactionPatch {
                description: Some("Dinner".into()),
                ..Default::default()
            },
        )
        .unwrap();
    let ids: Vec<&str> = store.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
    assert_eq!(store.get_index(1).unwrap().description, "Dinner");
}

#[test]
fn test_sample_has_unique_ids_and_matching_counterparties() {
    let sample = TransactionStore::sample();
    assert!(!sample.is_empty());
    let ids: Vec<&TransactionId> = sample.iter().map(|t| &t.id).collect();
    assert!(TransactionStore::new(sample.iter().cloned().collect()).is_ok());
    assert_eq!(ids.len(), sample.len());
    for t in sample.iter() {
        assert!(t.counterparty().is_some(), "{} has no counterparty", t.id);
    }
}

// ── Ledger CSV ────────────────────────────────────────────────

fn write_ledger(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_csv() {
    let file = write_ledger(
        "id,amount,description,recipient,sender,status,type\n\
         t1,42.5,Coffee,Cafe,,completed,sent\n\
         t2,1200,Salary,,Acme,pending,received\n",
    );
    let store = load_csv(file.path()).unwrap();
    assert_eq!(store.len(), 2);

    let t1 = store.get(&TransactionId::new("t1")).unwrap();
    assert_eq!(t1.amount, dec!(42.5));
    assert_eq!(t1.recipient.as_deref(), Some("Cafe"));
    assert_eq!(t1.sender, None);
    assert_eq!(t1.kind, TransactionType::Sent);

    let t2 = store.get(&TransactionId::new("t2")).unwrap();
    assert_eq!(t2.amount, dec!(1200));
    assert_eq!(t2.recipient, None);
    assert_eq!(t2.sender.as_deref(), Some("Acme"));
    assert_eq!(t2.status, TransactionStatus::Pending);
}

#[test]
fn test_load_csv_bad_status_reports_row() {
    let file = write_ledger(
        "id,amount,description,recipient,sender,status,type\n\
         t1,1,Ok,A,,completed,sent\n\
         t2,1,Bad,A,,lost,sent\n",
    );
    let err = load_csv(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("row 3"), "{err:#}");
}

#[test]
fn test_load_csv_duplicate_ids() {
    let file = write_ledger(
        "id,amount,description,recipient,sender,status,type\n\
         t1,1,One,A,,completed,sent\n\
         t1,2,Two,A,,completed,sent\n",
    );
    let err = load_csv(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("duplicate transaction id 't1'"));
}

#[test]
fn test_load_csv_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_csv(&dir.path().join("missing.csv")).is_err());
}

#[test]
fn test_export_then_load_preserves_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    let store = TransactionStore::sample();

    let count = export_csv(&store, &path).unwrap();
    assert_eq!(count, store.len());

    let loaded = load_csv(&path).unwrap();
    let original: Vec<&Transaction> = store.iter().collect();
    let reloaded: Vec<&Transaction> = loaded.iter().collect();
    assert_eq!(original.len(), reloaded.len());
    for (a, b) in original.iter().zip(reloaded.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.amount, b.amount);
        assert_eq!(a.recipient, b.recipient);
        assert_eq!(a.sender, b.sender);
        assert_eq!(a.kind, b.kind);
    }
}

#[test]
fn test_ledger_keeps_amounts_beyond_float_precision() {
    let file = write_ledger(
        "id,amount,description,recipient,sender,status,type\n\
         big,12345678901234567.89,Bond,Broker,,completed,payment\n\
         huge,123456789012345678901,Estate,,Notary,pending,received\n",
    );
    let store = load_csv(file.path()).unwrap();
    let big = Decimal::from_str("12345678901234567.89").unwrap();
    let huge = Decimal::from_str("123456789012345678901").unwrap();
    assert_eq!(store.get(&TransactionId::new("big")).unwrap().amount, big);
    assert_eq!(store.get(&TransactionId::new("huge")).unwrap().amount, huge);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    export_csv(&store, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("12345678901234567.89"), "{written}");

    let reloaded = load_csv(&path).unwrap();
    assert_eq!(reloaded.get(&TransactionId::new("big")).unwrap().amount, big);
    assert_eq!(reloaded.get(&TransactionId::new("huge")).unwrap().amount, huge);
}
