//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and are
//! generic over `ConnectionTrait`, so the same repository runs against the connection pool
//! or inside a transaction opened by the service layer.

pub mod member;
pub mod post;
pub mod post_tag;
pub mod tag;
