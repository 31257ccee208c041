extern crate alloc;

mod engine;
mod error;
mod finder;
mod index;
mod options;
mod query;

pub use engine::{
    FindOutcome,
    LearnerLookup,
    LearnerRecord,
    QueryResult,
    ResolvedMove,
    find_common,
};
pub use error::LookupError;
pub use finder::{
    LearnsetFinder,
    LoadStatus,
};
pub use index::MoveIndex;
pub use learnset_data::{
    DataSource,
    DetailAtom,
    LearnMethod,
    LearnMethodKind,
    Learner,
    LocalDataSource,
    MoveLearners,
    MoveTable,
    ReportDataSource,
    StaticDataSource,
};
pub use options::{
    FinderOptions,
    MatchThreshold,
};
pub use query::MoveQuery;
