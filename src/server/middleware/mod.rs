//! Request guards and validating extractors.

pub mod auth;
pub mod validation;
