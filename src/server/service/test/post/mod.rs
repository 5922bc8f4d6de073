use crate::{
    model::{
        auth::MemberRole,
        post::{PostCategory, PostStatus},
    },
    server::{
        error::{auth::AuthError, AppError},
        model::{
            auth::AuthMember,
            post::{CreatePostParams, PostSearchParams, UpdatePostParams},
        },
        service::post::PostService,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_paginated;
mod update;

fn auth_member(member: &entity::member::Model) -> AuthMember {
    AuthMember {
        id: member.id,
        nickname: member.nickname.clone(),
        role: MemberRole::Member,
    }
}

fn create_params(member_id: i32, tags: &[&str]) -> CreatePostParams {
    CreatePostParams {
        member_id,
        title: "Rust study".to_string(),
        content: "Ownership and borrowing".to_string(),
        category: PostCategory::Study,
        status: PostStatus::Todo,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn update_params(id: i32, tags: &[&str]) -> UpdatePostParams {
    UpdatePostParams {
        id,
        title: "Updated".to_string(),
        content: "Updated content".to_string(),
        category: PostCategory::Work,
        status: PostStatus::InProgress,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
