mod status;
mod transaction;
mod transaction_type;

pub use status::TransactionStatus;
pub use transaction::{Transaction, TransactionId, TransactionPatch};
pub use transaction_type::TransactionType;
