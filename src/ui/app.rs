use crossterm::event::KeyEvent;
use std::path::PathBuf;

use super::edit_modal::EditModal;
use crate::models::Transaction;
use crate::store::TransactionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Transactions
    pub(crate) store: TransactionStore,
    pub(crate) ledger_path: Option<PathBuf>,
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Open while a transaction is being edited; keys go here first
    pub(crate) edit_modal: Option<EditModal>,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(store: TransactionStore, ledger_path: Option<PathBuf>) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            store,
            ledger_path,
            transaction_index: 0,
            transaction_scroll: 0,

            edit_modal: None,

            visible_rows: 20,
        }
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.store.get_index(self.transaction_index)
    }

    /// Opens the edit dialog on the row under the cursor.
    pub(crate) fn open_editor(&mut self) {
        let Some(txn) = self.selected_transaction() else {
            self.set_status("No transaction selected");
            return;
        };
        tracing::info!(id = %txn.id, "opening edit dialog");
        self.edit_modal = Some(EditModal::new(txn));
        self.input_mode = InputMode::Editing;
    }

    /// Routes a key to the open dialog and drops the dialog once it asks to close.
    pub(crate) fn handle_editor_key(&mut self, key: KeyEvent) {
        let Some(modal) = self.edit_modal.as_mut() else {
            self.input_mode = InputMode::Normal;
            return;
        };
        let before = self.store.get(modal.transaction_id()).cloned();

        let mut dismissed = false;
        modal.handle_key(key, &mut self.store, || dismissed = true);
        if !dismissed {
            return;
        }

        if let Some(modal) = self.edit_modal.take() {
            let id = modal.transaction_id();
            let after = self.store.get(id);
            if after != before.as_ref() {
                self.set_status(format!("Updated {id}"));
            } else {
                self.set_status(format!("No changes to {id}"));
            }
        }
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
