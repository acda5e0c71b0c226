//! Decides whether a cash machine can honour withdrawal requests, which
//! notes to dispense for each one, and what stock remains afterwards.
//!
//! Requests stream in as CSV and receipts stream out as CSV; rejections are
//! reported and skipped, never fatal. The decision logic itself lives under
//! [`atm`] and is pure: every operation is a function of the amount and the
//! inventory value it is handed.

pub mod atm;
pub mod error_handler;
pub mod input;
pub mod output;
pub mod run;
