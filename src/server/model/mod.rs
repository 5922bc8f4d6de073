//! Domain models and operation parameters.
//!
//! Models in this module sit between the data layer and the controllers. Repositories
//! build them from SeaORM entities with `from_entity`, services pass them around, and
//! controllers turn them into wire DTOs with `into_dto`. Parameter types (`*Params`)
//! are built from request DTOs with `from_dto` and carry already-normalized input.

pub mod auth;
pub mod member;
pub mod post;
pub mod tag;
