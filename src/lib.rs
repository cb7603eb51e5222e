#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for model-rank
//!
//! This library scores machine-learning model artifacts against a fixed rubric of
//! weighted sub-metrics and emits one aggregate record per input identifier.
//!
//! # Module Organization
//!
//! - [`facts`]: The per-artifact [`Context`](facts::Context) and the collaborators that build it
//! - [`metrics`]: Metric units and the weighted [`Registry`](metrics::Registry)
//! - [`scoring`]: The [`Scorer`](scoring::Scorer) and the concurrent [`Dispatcher`](scoring::Dispatcher)
//! - [`reports`]: NDJSON and summary report generation
//! - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod facts;
pub mod metrics;
pub mod reports;
pub mod scoring;

pub use crate::commands::{Host, run};
