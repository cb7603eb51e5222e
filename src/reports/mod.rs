//! Report generation for scored records
//!
//! # Implementation Model
//!
//! Two generators are provided, each accessed through a `generate` function:
//! - **NDJSON**: One JSON object per input identifier, in input order, for machines
//! - **Summary**: A human-readable overview with aggregate statistics and rankings
//!
//! Both write to any [`core::fmt::Write`] sink so callers decide whether the output
//! goes to a file, the terminal, or a buffer in tests.

mod ndjson;
mod summary;

pub use ndjson::generate as generate_ndjson;
pub use summary::generate as generate_summary;
