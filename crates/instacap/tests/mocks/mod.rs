//! Mock implementations for API tests
//!
//! Provides an in-memory `PostSource` so handler tests never touch the network.

pub mod mock_source;

#[allow(unused_imports)]
pub use mock_source::{sample_post, MockSource};
