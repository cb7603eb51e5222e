//! Scoring of contexts and concurrent dispatch over batches of identifiers
//!
//! # Implementation Model
//!
//! The [`Scorer`] is pure computation: given a [`Context`](crate::facts::Context) it
//! evaluates every metric of its [`Registry`](crate::metrics::Registry) in order,
//! computes the weighted net score, and wraps everything in an [`OutputRecord`].
//!
//! The [`Dispatcher`] owns the concurrency. Each identifier gets its own tokio task,
//! gated by a semaphore sized to the worker count. A task classifies its identifier,
//! asks the [`ContextBuilder`](crate::facts::ContextBuilder) for a context, then scores
//! it. Join handles are awaited in input order, so the output order never depends on
//! which task finishes first.
//!
//! Anything that goes wrong for a single identifier (unclassifiable input, a failed or
//! slow context build, a panicking task) is captured as an [`Outcome::Failed`] record.

mod dispatcher;
mod output_record;
mod scorer;

pub use dispatcher::Dispatcher;
pub use output_record::{MetricScore, Outcome, OutputRecord, RecordError, Scorecard};
pub use scorer::Scorer;
