//! duesboard-domain
//!
//! Pure domain records for the group treasury dashboard (site info, roster,
//! collections, incomes, expenses, events, notices, banking details).
//! No I/O, no CLI, no storage. Only data types and derivation rules.

pub mod banking;
pub mod cashflow;
pub mod collection;
pub mod common;
pub mod event;
pub mod notice;
pub mod site;

pub use banking::*;
pub use cashflow::*;
pub use collection::*;
pub use common::*;
pub use event::*;
pub use notice::*;
pub use site::*;
