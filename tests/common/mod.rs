//! Common utilities for integration tests

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{ExponentialRelaxation, FrozenField};
pub use test_helpers::{
    assert_vectors_close,
    coarse_rod,
    collecting_recorder,
    relative_error,
    CollectedFrames,
};
