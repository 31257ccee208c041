mod move_index;

pub use move_index::MoveIndex;
