//! Context builder backed by the Hugging Face Hub
//!
//! Three requests describe a model:
//!
//! - `GET {base}/api/models/{id}` for metadata (license, tags, downloads, card data)
//! - `GET {base}/api/models/{id}/tree/main` for the file listing (size, Python sources)
//! - `GET {base}/{id}/raw/main/README.md` for documentation keywords
//!
//! The [`heuristics`] module turns the responses into a [`Context`](crate::facts::Context).

mod client;
pub mod heuristics;
mod model_info;
mod provider;

pub use client::{Client, DEFAULT_BASE_URL, HubApiResult, RetryPolicy};
pub use model_info::{ModelInfo, TreeEntry};
pub use provider::HubContextBuilder;
