//! duesboard-core
//!
//! The ledger deriver: pure services that turn raw treasury documents into
//! derived collection state, balance totals, and member statements.
//! Depends on duesboard-domain. No CLI, no terminal I/O, no storage.

pub mod error;
pub mod format;
pub mod ledger_service;
pub mod lookup_service;
pub mod summary_service;

pub use error::CoreError;
pub use format::*;
pub use ledger_service::*;
pub use lookup_service::*;
pub use summary_service::*;
