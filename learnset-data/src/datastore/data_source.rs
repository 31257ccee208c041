use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;

use crate::MoveLearners;

/// Table of learner data for all moves, keyed by canonical move name.
///
/// Moves keep the order they were read in.
pub type MoveTable = IndexMap<String, MoveLearners>;

/// Source of all move data.
///
/// This trait can be implemented for different data sources, such as files on disk or a remote
/// service. Each feed is fetched once, when the move index is first populated.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches the names of all valid moves, in display order.
    async fn move_list(&self) -> Result<Vec<String>>;

    /// Fetches learner data for all moves.
    async fn move_data(&self) -> Result<MoveTable>;
}
