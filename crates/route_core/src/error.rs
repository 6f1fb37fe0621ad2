use thiserror::Error;

/// Input validation errors raised before any traversal runs.
///
/// "No route exists" is deliberately *not* an error: a valid query against a
/// disconnected graph yields `Ok(None)` from the search instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The named node is not part of the graph.
    #[error("unknown node `{0}`")]
    UnknownNode(String),

    /// The metric selector does not name a supported weight dimension.
    #[error("unknown metric `{0}`, expected one of: distance, time, cost")]
    InvalidMetric(String),
}
