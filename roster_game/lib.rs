pub mod leveling;
pub mod models;
pub mod query;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
