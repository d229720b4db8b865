//! Allocation domain module.
//!
//! This crate contains the business rules for committing order demand against
//! stock batches, implemented purely as deterministic domain logic (no IO, no
//! storage, no batch-selection policy).

pub mod batch;
pub mod order_line;

pub use batch::{Batch, BatchSnapshot};
pub use order_line::OrderLine;
