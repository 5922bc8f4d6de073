//! SeaORM entity models for the board database.

pub mod prelude;

pub mod member;
pub mod post;
pub mod post_tag;
pub mod sea_orm_active_enums;
pub mod tag;
