use ahash::HashMap;
use learnset_data::{
    MoveLearners,
    MoveTable,
};
use unicase::UniCase;

use crate::{
    LearnerLookup,
    LookupError,
    ResolvedMove,
};

/// Checks if `name` starts with `prefix` when lower-cased.
///
/// `prefix` must already be lower-cased.
fn starts_with_lowercase(name: &str, prefix: &str) -> bool {
    let mut name = name.chars().flat_map(char::to_lowercase);
    prefix.chars().all(|c| name.next() == Some(c))
}

/// Index of all moves and the Mons that learn them.
///
/// The index is never mutated after it is created, so it can be shared freely for any number of
/// concurrent lookups.
#[derive(Debug, Default, Clone)]
pub struct MoveIndex {
    move_list: Vec<String>,
    moves: MoveTable,
    folded: HashMap<UniCase<String>, usize>,
}

impl MoveIndex {
    /// Creates a new index over the given move list and learner data.
    ///
    /// The move list drives suggestions. Learner data drives lookups. The two are not required to
    /// contain the same moves.
    pub fn new(move_list: Vec<String>, moves: MoveTable) -> Self {
        let mut folded = HashMap::default();
        for (i, name) in moves.keys().enumerate() {
            folded.entry(UniCase::new(name.clone())).or_insert(i);
        }
        Self {
            move_list,
            moves,
            folded,
        }
    }

    /// All move names, in source order.
    pub fn move_list(&self) -> &[String] {
        &self.move_list
    }

    /// Number of moves with learner data.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Suggests moves for a partially typed move name.
    ///
    /// Returns every move whose name starts with the trimmed prefix, ignoring case, in move list
    /// order. An empty prefix yields no suggestions. Suggestions are computed lazily on every call.
    pub fn suggest<'i>(&'i self, prefix: &str) -> impl Iterator<Item = &'i str> + use<'i> {
        let prefix = prefix.trim().to_lowercase();
        self.move_list
            .iter()
            .filter(move |name| !prefix.is_empty() && starts_with_lowercase(name, &prefix))
            .map(String::as_str)
    }

    /// Resolves a move name to its canonical name and learner data.
    ///
    /// An exact match is preferred over a case-insensitive match.
    pub fn resolve(&self, move_name: &str) -> Option<ResolvedMove<'_>> {
        let (name, learners) = match self.moves.get_key_value(move_name) {
            Some(entry) => entry,
            None => {
                let i = *self.folded.get(&UniCase::new(move_name.to_owned()))?;
                self.moves.get_index(i)?
            }
        };
        Some(ResolvedMove {
            name: name.as_str(),
            learners,
        })
    }

    /// Learner data for the given move.
    ///
    /// Returns [`None`] if the move is not in move data. This is not an error.
    pub fn learners(&self, move_name: &str) -> Option<&MoveLearners> {
        self.resolve(move_name).map(|resolved| resolved.learners)
    }

    /// The canonical name of a move, for writing a selected suggestion back to user input.
    pub fn canonical_name(&self, input: &str) -> Option<&str> {
        let input = UniCase::new(input.trim());
        self.move_list
            .iter()
            .chain(self.moves.keys())
            .find(|name| UniCase::new(name.as_str()) == input)
            .map(String::as_str)
    }
}

impl LearnerLookup for MoveIndex {
    fn lookup(&self, move_name: &str) -> Result<ResolvedMove<'_>, LookupError> {
        self.resolve(move_name)
            .ok_or_else(|| LookupError::UnknownMove(move_name.to_owned()))
    }
}
