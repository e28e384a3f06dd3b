use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Base trait for queries (query handlers)
///
/// Provides a standard interface for read-side handlers so callers can
/// depend on the shape of a query rather than a concrete handler type.
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
