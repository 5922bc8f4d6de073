use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_PAGE_SIZE: u64 = 5;
/// Largest accepted page index; keeps `page * size` within `u64`.
pub const MAX_PAGE: u64 = i32::MAX as u64;
pub const DEFAULT_SORT: &str = "createdAt,desc";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostCategory {
    Study,
    Work,
    Life,
    Exercise,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

/// Field the `keyword` query parameter is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchType {
    Title,
    Content,
    Nickname,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDto {
    #[validate(length(max = 500, message = "Title must be at most 500 characters."))]
    pub title: String,
    #[validate(length(max = 5000, message = "Content must be at most 5000 characters."))]
    pub content: String,
    pub category: PostCategory,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub tag_list: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostDto {
    #[validate(length(max = 500, message = "Title must be at most 500 characters."))]
    pub title: String,
    #[validate(length(max = 5000, message = "Content must be at most 5000 characters."))]
    pub content: String,
    pub category: PostCategory,
    pub status: PostStatus,
    /// Desired tag set; an empty list removes every tag
    #[serde(default)]
    pub tag_list: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    /// Nickname of the author
    pub created_by: String,
    pub category: PostCategory,
    pub status: PostStatus,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedPostsDto {
    pub posts: Vec<PostDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PostListQuery {
    /// Field the keyword is matched against
    pub search_type: Option<SearchType>,
    /// Case-insensitive substring, ignored without `searchType`
    pub keyword: Option<String>,
    pub category: Option<PostCategory>,
    pub status: Option<PostStatus>,
    /// Case-insensitive substring matched against tag names
    pub tag: Option<String>,
    /// Zero-based page index
    #[serde(default)]
    #[validate(range(max = MAX_PAGE, message = "Page is out of range."))]
    pub page: u64,
    /// Page size between 1 and 100
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100, message = "Size must be between 1 and 100."))]
    pub size: u64,
    /// `property[,asc|desc]`, e.g. `createdAt,desc`
    pub sort: Option<String>,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
