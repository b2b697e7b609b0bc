//! Lambda runtime integration for the text preprocessing service.
//!
//! This crate owns runtime integration details (the event handler and
//! the API Gateway response envelope). The normalization pipeline and
//! the request contract live in `preprocess_core`.

pub mod handlers;
