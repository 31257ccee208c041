mod intersection;
mod lookup;
mod query_result;

pub use intersection::find_common;
pub use lookup::{
    LearnerLookup,
    ResolvedMove,
};
pub use query_result::{
    FindOutcome,
    LearnerRecord,
    QueryResult,
};
