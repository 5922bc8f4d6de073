use crate::{
    model::auth::MemberRole,
    server::{data::member::MemberRepository, model::member::CreateMemberParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists;
