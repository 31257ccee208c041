use ahash::HashSet;
use indexmap::{
    IndexMap,
    IndexSet,
};
use itertools::Itertools;
use log::{
    debug,
    warn,
};
use unicase::UniCase;

use crate::{
    FindOutcome,
    FinderOptions,
    LearnerLookup,
    LearnerRecord,
    MatchThreshold,
    QueryResult,
};

/// Everything accumulated for a single Mon over the course of a query.
#[derive(Default)]
struct Accumulated {
    records: Vec<LearnerRecord>,
    /// Indices of distinct resolved moves the Mon learns.
    moves: HashSet<usize>,
}

impl Accumulated {
    fn matches(&self, threshold: MatchThreshold, required: usize) -> bool {
        match threshold {
            MatchThreshold::QueriedMoves => self.records.len() == required,
            MatchThreshold::DistinctResolvedMoves => self.moves.len() == required,
        }
    }
}

fn queried_moves<S>(moves: &[S], deduplicate: bool) -> Vec<&str>
where
    S: AsRef<str>,
{
    let moves = moves.iter().map(AsRef::as_ref);
    if deduplicate {
        moves.unique_by(|name| UniCase::new(*name)).collect()
    } else {
        moves.collect()
    }
}

/// Finds all Mons that can learn every move in `moves`.
///
/// Each move is resolved with `lookup`. Moves that cannot be resolved are skipped and reported as
/// diagnostics. Every way a Mon learns each resolved move is accumulated as a [`LearnerRecord`],
/// and Mons that reach the threshold set in `options` are returned in order of first appearance.
///
/// With [`MatchThreshold::QueriedMoves`], the threshold is the number of queried moves, including
/// duplicates and moves that could not be resolved. Thus, a single unresolved move makes every
/// query fail to match, and a Mon that learns one move by two methods can make up for a move it
/// does not learn.
///
/// An empty query matches nothing.
pub fn find_common<L, S>(lookup: &L, moves: &[S], options: &FinderOptions) -> FindOutcome
where
    L: LearnerLookup + ?Sized,
    S: AsRef<str>,
{
    let moves = queried_moves(moves, options.deduplicate_moves);
    let mut diagnostics = Vec::new();
    let mut resolved = IndexSet::<&str>::new();
    let mut accumulator = IndexMap::<&str, Accumulated>::new();

    for move_name in &moves {
        let found = match lookup.lookup(move_name) {
            Ok(found) => found,
            Err(err) => {
                warn!("Skipping move in query: {err}");
                diagnostics.push(err);
                continue;
            }
        };
        let (move_index, _) = resolved.insert_full(found.name);
        for (mon, method) in found.learners.flatten() {
            let entry = accumulator.entry(mon).or_default();
            entry.records.push(LearnerRecord::new(found.name, method));
            entry.moves.insert(move_index);
        }
    }

    let required = match options.threshold {
        MatchThreshold::QueriedMoves => moves.len(),
        MatchThreshold::DistinctResolvedMoves => resolved.len(),
    };
    debug!(
        "Queried {} moves ({} resolved); {} candidate Mons must match {required}",
        moves.len(),
        resolved.len(),
        accumulator.len(),
    );

    let results = accumulator
        .into_iter()
        .filter(|(_, accumulated)| required > 0 && accumulated.matches(options.threshold, required))
        .map(|(name, accumulated)| QueryResult {
            name: name.to_owned(),
            methods: accumulated.records,
        })
        .collect();
    FindOutcome {
        results,
        diagnostics,
    }
}
