use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Transaction, TransactionId, TransactionPatch, TransactionStatus, TransactionType};
use crate::store::UpdateTransaction;

/// Focusable controls of the edit dialog, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Type,
    Amount,
    Description,
    Recipient,
    Sender,
    Status,
    Cancel,
    Save,
}

impl Field {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Type => "Type",
            Self::Amount => "Amount (€)",
            Self::Description => "Description",
            Self::Recipient => "Recipient",
            Self::Sender => "Sender",
            Self::Status => "Status",
            Self::Cancel => "Cancel",
            Self::Save => "Save Changes",
        }
    }

    pub(crate) fn is_text(&self) -> bool {
        matches!(
            self,
            Self::Amount | Self::Description | Self::Recipient | Self::Sender
        )
    }

    pub(crate) fn is_select(&self) -> bool {
        matches!(self, Self::Type | Self::Status)
    }
}

/// Why a submission was blocked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum FormError {
    #[error("Amount is required")]
    AmountRequired,
    #[error("Amount '{0}' is not a number")]
    AmountInvalid(String),
    #[error("Amount can have at most 2 decimal places")]
    AmountPrecision,
    #[error("Description is required")]
    DescriptionRequired,
}

impl FormError {
    pub(crate) fn field(&self) -> Field {
        match self {
            Self::AmountRequired | Self::AmountInvalid(_) | Self::AmountPrecision => Field::Amount,
            Self::DescriptionRequired => Field::Description,
        }
    }
}

/// Editable copy of a transaction. Amount stays text until submit so that
/// half-typed values like `"12."` survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EditBuffer {
    pub(crate) amount: String,
    pub(crate) description: String,
    pub(crate) recipient: String,
    pub(crate) sender: String,
    pub(crate) status: TransactionStatus,
    pub(crate) kind: TransactionType,
}

impl EditBuffer {
    pub(crate) fn from_transaction(txn: &Transaction) -> Self {
        Self {
            amount: txn.amount.normalize().to_string(),
            description: txn.description.clone(),
            recipient: txn.recipient.clone().unwrap_or_default(),
            sender: txn.sender.clone().unwrap_or_default(),
            status: txn.status,
            kind: txn.kind,
        }
    }

    pub(crate) fn shows_recipient(&self) -> bool {
        self.kind.is_outbound()
    }

    pub(crate) fn shows_sender(&self) -> bool {
        self.kind.is_inbound()
    }

    pub(crate) fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Amount => Some(self.amount.as_str()),
            Field::Description => Some(self.description.as_str()),
            Field::Recipient => Some(self.recipient.as_str()),
            Field::Sender => Some(self.sender.as_str()),
            _ => None,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Amount => Some(&mut self.amount),
            Field::Description => Some(&mut self.description),
            Field::Recipient => Some(&mut self.recipient),
            Field::Sender => Some(&mut self.sender),
            _ => None,
        }
    }

    /// Builds the update payload, or the first constraint the buffer breaks.
    ///
    /// Both counterparties are always sent, including the hidden one, and an
    /// empty counterparty is sent as a removal rather than as empty text.
    pub(crate) fn to_patch(&self) -> Result<TransactionPatch, FormError> {
        let amount = parse_amount(&self.amount)?;
        if self.description.is_empty() {
            return Err(FormError::DescriptionRequired);
        }
        Ok(TransactionPatch {
            amount: Some(amount),
            description: Some(self.description.clone()),
            recipient: Some(non_empty(&self.recipient)),
            sender: Some(non_empty(&self.sender)),
            status: Some(self.status),
            kind: Some(self.kind),
        })
    }
}

fn parse_amount(text: &str) -> Result<Decimal, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FormError::AmountRequired);
    }
    let amount = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| FormError::AmountInvalid(text.to_string()))?;
    // Cents are the smallest step
    if amount.normalize().scale() > 2 {
        return Err(FormError::AmountPrecision);
    }
    Ok(amount)
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Modal dialog editing one transaction.
///
/// The dialog owns nothing but its buffer. Saving goes through the
/// [`UpdateTransaction`] capability and closing goes through the `on_close`
/// callback handed to [`EditModal::handle_key`]; dropping the dialog after
/// `on_close` fires is the owner's job.
#[derive(Debug, Clone)]
pub(crate) struct EditModal {
    id: TransactionId,
    buffer: EditBuffer,
    focus: Field,
    error: Option<FormError>,
}

impl EditModal {
    pub(crate) fn new(txn: &Transaction) -> Self {
        Self {
            id: txn.id.clone(),
            buffer: EditBuffer::from_transaction(txn),
            focus: Field::Type,
            error: None,
        }
    }

    pub(crate) fn transaction_id(&self) -> &TransactionId {
        &self.id
    }

    pub(crate) fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub(crate) fn focus(&self) -> Field {
        self.focus
    }

    pub(crate) fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Visible controls in tab order. Exactly one counterparty field is shown.
    pub(crate) fn fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Type, Field::Amount, Field::Description];
        if self.buffer.shows_recipient() {
            fields.push(Field::Recipient);
        }
        if self.buffer.shows_sender() {
            fields.push(Field::Sender);
        }
        fields.extend([Field::Status, Field::Cancel, Field::Save]);
        fields
    }

    pub(crate) fn handle_key(
        &mut self,
        key: KeyEvent,
        updater: &mut impl UpdateTransaction,
        on_close: impl FnOnce(),
    ) {
        match key.code {
            // Close icon
            KeyCode::Esc => self.cancel(on_close),
            KeyCode::Enter if self.focus == Field::Cancel => self.cancel(on_close),
            KeyCode::Enter => self.submit(updater, on_close),
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Left if self.focus.is_select() => self.cycle(false),
            KeyCode::Right | KeyCode::Char(' ') if self.focus.is_select() => self.cycle(true),
            KeyCode::Left if self.focus == Field::Save => self.focus = Field::Cancel,
            KeyCode::Right if self.focus == Field::Cancel => self.focus = Field::Save,
            KeyCode::Backspace => {
                if let Some(text) = self.buffer.text_mut(self.focus) {
                    text.pop();
                    self.error = None;
                }
            }
            // AltGr arrives as Ctrl+Alt on some platforms
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(KeyModifiers::ALT) =>
            {
                if let Some(text) = self.buffer.text_mut(self.focus) {
                    text.push(c);
                    self.error = None;
                }
            }
            _ => {}
        }
    }

    /// Validates the buffer, hands the payload to `updater`, then closes.
    /// The update's result does not decide whether the dialog closes.
    pub(crate) fn submit(&mut self, updater: &mut impl UpdateTransaction, on_close: impl FnOnce()) {
        let patch = match self.buffer.to_patch() {
            Ok(patch) => patch,
            Err(err) => {
                tracing::debug!(id = %self.id, "edit blocked: {err}");
                self.focus = err.field();
                self.error = Some(err);
                return;
            }
        };

        tracing::info!(id = %self.id, "saving transaction edit");
        if let Err(err) = updater.update_transaction(&self.id, patch) {
            tracing::warn!(id = %self.id, "transaction update failed: {err:#}");
        }
        on_close();
    }

    pub(crate) fn cancel(&mut self, on_close: impl FnOnce()) {
        tracing::info!(id = %self.id, "transaction edit cancelled");
        on_close();
    }

    fn cycle(&mut self, forward: bool) {
        match self.focus {
            Field::Type => {
                self.buffer.kind = if forward {
                    self.buffer.kind.next()
                } else {
                    self.buffer.kind.prev()
                };
            }
            Field::Status => {
                self.buffer.status = if forward {
                    self.buffer.status.next()
                } else {
                    self.buffer.status.prev()
                };
            }
            _ => return,
        }
        self.error = None;
    }

    fn focus_next(&mut self) {
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + 1) % fields.len()];
    }

    fn focus_prev(&mut self) {
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + fields.len() - 1) % fields.len()];
    }
}
