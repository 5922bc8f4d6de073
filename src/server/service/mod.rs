//! Business logic layer.
//!
//! Services are thin, per-request structs borrowing the shared database connection.
//! They orchestrate repositories, enforce business rules such as ownership and
//! uniqueness, and open transactions around multi-step writes.

pub mod auth;
pub mod post;
pub mod token;

#[cfg(test)]
mod test;
