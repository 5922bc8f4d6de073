//! Wire-level DTOs exchanged with API clients.
//!
//! These types define the JSON request/response bodies and query strings of the HTTP
//! API. They derive `serde` for (de)serialization, `utoipa` for the OpenAPI document,
//! and `validator` where the request carries field constraints.

pub mod api;
pub mod auth;
pub mod post;
