//! Facts about model artifacts and the collaborators that gather them
//!
//! This module owns the [`Context`] type, the read-only bundle of facts that metric
//! units consume, together with everything needed to produce one from a raw input
//! identifier.
//!
//! # Implementation Model
//!
//! - [`classify`] maps an identifier to a [`Category`] using URL heuristics. Only
//!   [`Category::Model`] identifiers are scored.
//! - [`ContextBuilder`] is the seam between the scoring core and the outside world.
//!   Implementations resolve an identifier into a [`Context`] or fail with a
//!   [`ContextError`].
//! - [`hub`] provides the production builder, which talks to the Hugging Face Hub.
//!
//! Every field of a [`Context`] is optional so that "unknown" stays distinct from
//! "worst value". Each metric documents its own policy for missing data.

mod builder;
mod category;
mod context;
mod context_error;
pub mod hub;
mod model_ref;

pub use builder::ContextBuilder;
pub use category::{Category, classify};
pub use context::{Context, DatasetDocs, DocFlags, LintReport, PerformanceEvidence};
pub use context_error::ContextError;
pub use model_ref::{ModelRef, display_name};
