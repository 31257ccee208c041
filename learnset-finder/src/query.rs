use crate::LookupError;

/// A validated set of moves to query.
///
/// Built from raw user input, where each slot holds at most one move name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveQuery {
    moves: Vec<String>,
}

impl MoveQuery {
    /// Creates a query from input slots.
    ///
    /// Slots are trimmed, and empty slots are dropped. Fails if no slot holds a move.
    pub fn from_slots<I, S>(slots: I) -> Result<Self, LookupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let moves = slots
            .into_iter()
            .map(|slot| slot.as_ref().trim().to_owned())
            .filter(|slot| !slot.is_empty())
            .collect::<Vec<_>>();
        if moves.is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        Ok(Self { moves })
    }

    /// The queried moves, in input order.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
