pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod filter;
pub mod gate;
pub mod models;
pub mod site;
pub mod store;
pub mod submit;

// Test utilities, usable by dependent crates via the `test_utils` feature
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
