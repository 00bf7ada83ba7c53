#![allow(clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rust_decimal_macros::dec;

use super::handle_key;
use crate::models::TransactionId;
use crate::store::TransactionStore;
use crate::ui::app::{App, InputMode};

fn sample_app() -> App {
    App::new(TransactionStore::sample(), None)
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(KeyEvent::new(code, KeyModifiers::NONE), app);
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_enter_opens_editor_on_selected_row() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Editing);
    let modal = app.edit_modal.as_ref().unwrap();
    assert_eq!(modal.transaction_id().as_str(), "txn_2");
}

#[test]
fn test_enter_release_does_not_submit_new_editor() {
    let mut app = sample_app();
    let before = app.store.get(&TransactionId::new("txn_1")).cloned();
    press(&mut app, KeyCode::Enter);
    handle_key(
        KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release),
        &mut app,
    );

    assert_eq!(app.input_mode, InputMode::Editing);
    assert!(app.edit_modal.is_some());
    assert!(app.status_message.is_empty());
    assert_eq!(app.store.get(&TransactionId::new("txn_1")).cloned(), before);
}

#[test]
fn test_escape_discards_edits() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, " at noon");
    press(&mut app, KeyCode::Esc);

    assert!(app.edit_modal.is_none());
    assert_eq!(app.input_mode, InputMode::Normal);
    let txn = app.store.get(&TransactionId::new("txn_1")).unwrap();
    assert_eq!(txn.description, "Coffee");
    assert_eq!(app.status_message, "No changes to txn_1");
}

#[test]
fn test_submit_updates_store_and_closes() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Tab);
    for _ in 0..4 {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "100");
    press(&mut app, KeyCode::Enter);

    assert!(app.edit_modal.is_none());
    assert_eq!(app.input_mode, InputMode::Normal);
    let txn = app.store.get(&TransactionId::new("txn_1")).unwrap();
    assert_eq!(txn.amount, dec!(100));
    assert_eq!(txn.recipient.as_deref(), Some("Cafe"));
    assert_eq!(app.status_message, "Updated txn_1");
}

#[test]
fn test_unchanged_submit_leaves_record_equal() {
    let mut app = sample_app();
    let before = app.store.get(&TransactionId::new("txn_1")).unwrap().clone();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert!(app.edit_modal.is_none());
    assert_eq!(app.store.get(&TransactionId::new("txn_1")).unwrap(), &before);
}

#[test]
fn test_clearing_recipient_removes_it() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Enter);
    // Type, Amount, Description, Recipient
    for _ in 0..3 {
        press(&mut app, KeyCode::Tab);
    }
    for _ in 0.."Cafe".len() {
        press(&mut app, KeyCode::Backspace);
    }
    press(&mut app, KeyCode::Enter);
    let txn = app.store.get(&TransactionId::new("txn_1")).unwrap();
    assert_eq!(txn.recipient, None);
}

#[test]
fn test_modal_captures_quit_key() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Char('q'));
    assert!(app.running);
    assert!(app.edit_modal.is_some());
}

#[test]
fn test_invalid_amount_keeps_modal_open() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "x");
    press(&mut app, KeyCode::Enter);
    assert!(app.edit_modal.is_some());
    assert_eq!(app.input_mode, InputMode::Editing);
    let txn = app.store.get(&TransactionId::new("txn_1")).unwrap();
    assert_eq!(txn.amount, dec!(42.5));
}

#[test]
fn test_editor_on_empty_store_reports_status() {
    let mut app = App::new(TransactionStore::default(), None);
    press(&mut app, KeyCode::Char('e'));
    assert!(app.edit_modal.is_none());
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.status_message, "No transaction selected");
}

#[test]
fn test_cursor_movement_is_bounded() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.transaction_index, 0);
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.transaction_index, app.store.len() - 1);
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.transaction_index, app.store.len() - 1);
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.transaction_index, 0);
}

#[test]
fn test_command_mode_quit() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char(':'));
    assert_eq!(app.input_mode, InputMode::Command);
    type_text(&mut app, "quit");
    press(&mut app, KeyCode::Enter);
    assert!(!app.running);
}

#[test]
fn test_command_mode_edit() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char(':'));
    type_text(&mut app, "edit");
    press(&mut app, KeyCode::Enter);
    assert!(app.edit_modal.is_some());
    assert_eq!(app.input_mode, InputMode::Editing);
}

#[test]
fn test_unknown_command_suggests() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char(':'));
    type_text(&mut app, "exprt");
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.status_message,
        "Unknown command: :exprt. Did you mean :export?"
    );
}

#[test]
fn test_export_without_ledger_needs_path() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char(':'));
    type_text(&mut app, "w");
    press(&mut app, KeyCode::Enter);
    assert!(app.status_message.starts_with("No ledger file loaded"));
}

#[test]
fn test_export_writes_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let mut app = sample_app();

    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Right); // Sent -> Received
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char(':'));
    type_text(&mut app, &format!("export {}", path.display()));
    press(&mut app, KeyCode::Enter);
    assert!(app.status_message.starts_with("Exported 5 transactions"));

    let reloaded = crate::store::load_csv(&path).unwrap();
    let txn = reloaded.get(&TransactionId::new("txn_1")).unwrap();
    assert_eq!(txn.kind, crate::models::TransactionType::Received);
    // Hidden recipient is kept
    assert_eq!(txn.recipient.as_deref(), Some("Cafe"));
}

#[test]
fn test_failed_export_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.csv");
    let mut app = sample_app();
    press(&mut app, KeyCode::Char(':'));
    type_text(&mut app, &format!("w {}", path.display()));
    press(&mut app, KeyCode::Enter);
    assert!(app.running);
    assert!(app.status_message.starts_with("Error: Failed to create file"));
}

#[test]
fn test_help_closes_on_any_key() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);
    press(&mut app, KeyCode::Char('e'));
    assert!(!app.show_help);
    assert!(app.edit_modal.is_none());
}
