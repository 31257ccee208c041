use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// How the number of moves a Mon must match is counted.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MatchThreshold {
    /// A Mon must have one learn method record for every queried move, including duplicate moves
    /// and moves that are not found.
    ///
    /// Records are counted, not moves, so a Mon that learns one move by two methods counts twice.
    #[default]
    #[string = "QueriedMoves"]
    QueriedMoves,
    /// A Mon must learn every distinct move that was found.
    #[string = "DistinctResolvedMoves"]
    DistinctResolvedMoves,
}

/// Options for configuring how queries are answered.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderOptions {
    /// How matches are counted.
    #[serde(default)]
    pub threshold: MatchThreshold,
    /// Remove duplicate moves from queries, ignoring case, before resolving them.
    #[serde(default)]
    pub deduplicate_moves: bool,
}
