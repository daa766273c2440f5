pub mod account;
pub mod clock;
pub mod ids;
pub mod input;
pub mod ledger;
pub mod money;
pub mod report;
mod result;
pub mod session;
pub mod transaction;

pub use account::{Account, AccountError};
pub use ledger::Ledger;
pub use money::Money;
pub use result::Result;
pub use session::{Session, SessionOutcome};
pub use transaction::{Transaction, TransactionKind};
