//! Shared value types for the condition engine.

pub(crate) mod timestamp;

pub use timestamp::Timestamp;
