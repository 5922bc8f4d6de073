use crate::server::data::tag::TagRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_or_create_by_names;
