use super::{Context, ContextError};

/// Resolves an identifier into the facts needed to score it.
///
/// This is where all blocking and network access lives; the scoring core only ever
/// sees finished [`Context`] values. Implementations are shared across worker tasks,
/// so they must be `Send + Sync`.
pub trait ContextBuilder: Send + Sync + 'static {
    /// Build the context for `identifier`.
    fn build(&self, identifier: &str) -> impl Future<Output = Result<Context, ContextError>> + Send;
}
