//! pocket-domain
//!
//! Pure domain models (Transaction, Account, category taxonomy, Ledger, filters).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod account;
pub mod category;
pub mod common;
pub mod filter;
pub mod ledger;
pub mod locale;
pub mod transaction;

pub use account::*;
pub use category::*;
pub use common::*;
pub use filter::*;
pub use ledger::*;
pub use locale::*;
pub use transaction::*;
