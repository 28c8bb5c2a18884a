pub mod fixtures;
pub mod test_app;

pub use fixtures::*;
pub use test_app::{
    OTHER_AUTHORITY_ID, TEST_AUTHORITY_ID, TEST_AUTHORITY_NAME, TestApp, TestResponse,
};
