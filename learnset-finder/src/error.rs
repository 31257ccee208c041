use thiserror::Error;

/// An error for a single move that could not be used in a query.
///
/// None of these errors are fatal to a query. They are collected as diagnostics alongside query
/// results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Move data has not been loaded, either because loading is still in progress or because it
    /// failed.
    #[error("move data is not loaded, so \"{0}\" cannot be looked up")]
    DataNotLoaded(String),
    /// The move does not exist in move data.
    #[error("move \"{0}\" not found in move data")]
    UnknownMove(String),
    /// The query contains no moves.
    #[error("enter at least one move")]
    EmptyQuery,
}
