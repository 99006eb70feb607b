//! Per-team points.

pub mod ledger;

pub use ledger::ScoreLedger;
