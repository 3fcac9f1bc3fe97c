//! pocket-core
//!
//! Ledger store, aggregation and filtering for Pocketbook.
//! Depends on pocket-domain. No CLI, no terminal I/O, no concrete storage backend.

pub mod account_service;
pub mod category_service;
pub mod error;
pub mod format;
pub mod ids;
pub mod ledger_book;
pub mod storage;
pub mod summary_service;
pub mod time;
pub mod transaction_service;


pub use account_service::*;
pub use category_service::*;
pub use error::CoreError;
pub use format::*;
pub use ids::MonotonicIds;
pub use ledger_book::*;
pub use storage::*;
pub use summary_service::*;
pub use time::*;
pub use transaction_service::*;
