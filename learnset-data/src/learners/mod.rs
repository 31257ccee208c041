mod detail_atom;
mod learn_method;
mod move_learners;

pub use detail_atom::DetailAtom;
pub use learn_method::{
    LearnMethod,
    LearnMethodKind,
};
pub use move_learners::{
    Learner,
    MoveLearners,
};
