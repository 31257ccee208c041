extern crate alloc;

mod datastore;
mod learners;
mod text;

#[cfg(test)]
pub mod test_util;

pub use datastore::*;
pub use learners::*;
pub use text::*;
