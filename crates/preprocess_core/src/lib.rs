//! Shared text preprocessing domain primitives.
//!
//! This crate owns the deterministic normalization pipeline and the
//! request contract. It intentionally excludes AWS SDK and Lambda
//! runtime concerns.

pub mod contract;
pub mod normalize;
