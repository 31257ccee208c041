mod dataset;
mod error_assert;
mod setup;

pub use dataset::TestDatasetBuilder;
pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use setup::setup_test_environment;
