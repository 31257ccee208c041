use anyhow::Result;
use async_trait::async_trait;

use crate::{
    DataSource,
    MoveTable,
};

/// An implementation of [`DataSource`] over data that is already in memory.
#[derive(Debug, Default, Clone)]
pub struct StaticDataSource {
    pub move_list: Vec<String>,
    pub moves: MoveTable,
}

impl StaticDataSource {
    pub fn new(move_list: Vec<String>, moves: MoveTable) -> Self {
        Self { move_list, moves }
    }

    /// Creates a new instance where the move list is every move in the table, in table order.
    pub fn from_move_table(moves: MoveTable) -> Self {
        Self {
            move_list: moves.keys().cloned().collect(),
            moves,
        }
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn move_list(&self) -> Result<Vec<String>> {
        Ok(self.move_list.clone())
    }

    async fn move_data(&self) -> Result<MoveTable> {
        Ok(self.moves.clone())
    }
}
