use super::{OutputRecord, RecordError, Scorer};
use crate::facts::{Category, ContextBuilder, ContextError, classify};
use core::num::NonZero;
use core::time::Duration;
use futures_util::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

const LOG_TARGET: &str = "dispatcher";

/// Fans identifiers out across a bounded pool of tasks and collects one record per
/// identifier, in input order.
#[derive(Debug)]
pub struct Dispatcher<B> {
    builder: Arc<B>,
    scorer: Scorer,
    workers: NonZero<usize>,
    task_timeout: Option<Duration>,
}

impl<B: ContextBuilder> Dispatcher<B> {
    /// Create a dispatcher using one worker per available CPU and no timeout.
    #[must_use]
    pub fn new(builder: Arc<B>, scorer: Scorer) -> Self {
        Self {
            builder,
            scorer,
            workers: default_workers(),
            task_timeout: None,
        }
    }

    #[must_use]
    pub const fn with_workers(mut self, workers: NonZero<usize>) -> Self {
        self.workers = workers;
        self
    }

    /// Limit how long building a single context may take.
    #[must_use]
    pub const fn with_task_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.task_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn workers(&self) -> NonZero<usize> {
        self.workers
    }

    /// Score every identifier.
    ///
    /// Returns exactly one record per identifier, in the same order, once every task
    /// has finished. Failures of individual identifiers are reported in their records
    /// and never abort the batch.
    pub async fn run<I, S>(&self, identifiers: I) -> Vec<OutputRecord>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let identifiers: Vec<String> = identifiers.into_iter().map(Into::into).collect();
        log::info!(
            target: LOG_TARGET,
            "scoring {} identifier(s) with {} worker(s)",
            identifiers.len(),
            self.workers
        );

        let semaphore = Arc::new(Semaphore::new(self.workers.get()));
        let mut tasks: Vec<JoinHandle<OutputRecord>> = Vec::with_capacity(identifiers.len());
        for identifier in &identifiers {
            let semaphore = Arc::clone(&semaphore);
            let builder = Arc::clone(&self.builder);
            let scorer = self.scorer.clone();
            let timeout = self.task_timeout;
            let identifier = identifier.clone();

            tasks.push(tokio::spawn(async move {
                // the semaphore is never closed, so a permit is always eventually granted
                let _permit = semaphore.acquire_owned().await.ok();
                process(builder.as_ref(), &scorer, &identifier, timeout).await
            }));
        }

        let results = join_all(tasks).await;

        identifiers
            .into_iter()
            .zip(results)
            .map(|(identifier, result)| {
                result.unwrap_or_else(|e| {
                    log::error!(target: LOG_TARGET, "task for '{identifier}' did not complete: {e}");
                    OutputRecord::failed(
                        identifier.as_str(),
                        classify(&identifier),
                        RecordError::new(RecordError::INTERNAL, format!("scoring task failed: {e}")),
                    )
                })
            })
            .collect()
    }
}

async fn process<B: ContextBuilder>(builder: &B, scorer: &Scorer, identifier: &str, timeout: Option<Duration>) -> OutputRecord {
    let category = classify(identifier);
    match category {
        Category::Model => {}
        Category::Dataset | Category::Code => {
            log::debug!(target: LOG_TARGET, "passing through {category} '{identifier}'");
            return OutputRecord::unscored(identifier, category);
        }
        Category::Unknown => {
            log::warn!(target: LOG_TARGET, "could not classify '{identifier}'");
            return OutputRecord::failed(
                identifier,
                category,
                RecordError::new(RecordError::UNCLASSIFIED, format!("'{identifier}' is not a recognized model, dataset or code URL")),
            );
        }
    }

    let built = match timeout {
        Some(limit) => tokio::time::timeout(limit, builder.build(identifier))
            .await
            .unwrap_or(Err(ContextError::Timeout(limit))),
        None => builder.build(identifier).await,
    };

    match built {
        Ok(context) => scorer.score(identifier, &context),
        Err(e) => {
            log::warn!(target: LOG_TARGET, "unable to gather facts for '{identifier}': {e}");
            OutputRecord::failed(identifier, category, RecordError::from(&e))
        }
    }
}

fn default_workers() -> NonZero<usize> {
    std::thread::available_parallelism().unwrap_or(NonZero::<usize>::MIN)
}
