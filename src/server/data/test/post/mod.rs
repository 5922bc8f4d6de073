use crate::{
    model::post::{PostCategory, PostStatus, SearchType},
    server::{
        data::post::PostRepository,
        model::post::{
            CreatePostParams, PostFilter, PostSort, PostSortField, SortDirection,
            UpdatePostParams,
        },
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod update;
