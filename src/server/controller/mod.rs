//! HTTP request handlers.
//!
//! Controllers extract and validate input, convert DTOs to domain parameters, call the
//! service layer and map the result back to DTOs. Every handler is annotated with
//! `#[utoipa::path]` for the OpenAPI document.

pub mod auth;
pub mod post;

#[cfg(test)]
mod test;
