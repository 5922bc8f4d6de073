//! Post domain models, parameters and search criteria.
//!
//! Provides the `Post` domain model returned by the service layer, parameter types for
//! create/update operations, and the filter/sort/pagination criteria used when listing
//! posts. Also holds the conversions between wire enums and their database counterparts.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::{
    model::post::{
        CreatePostDto, PaginatedPostsDto, PostCategory, PostDto, PostListQuery, PostStatus,
        SearchType, UpdatePostDto, DEFAULT_SORT,
    },
    server::{
        error::{auth::AuthError, AppError},
        model::{auth::AuthMember, tag::normalize_tag_names},
    },
};

/// Post with its author's nickname and tag names.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_id: i32,
    pub author_nickname: String,
    pub category: PostCategory,
    pub status: PostStatus,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Builds the domain model from a post entity and the data loaded alongside it.
    ///
    /// # Arguments
    /// - `entity` - Post row
    /// - `author_nickname` - Nickname of the member referenced by `entity.member_id`
    /// - `tags` - Names of the tags linked to the post
    pub fn from_entity(
        entity: entity::post::Model,
        author_nickname: String,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            author_id: entity.member_id,
            author_nickname,
            category: entity.category.into(),
            status: entity.status.into(),
            tags,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            title: self.title,
            content: self.content,
            created_by: self.author_nickname,
            category: self.category,
            status: self.status,
            tag_list: self.tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Post row joined with its author, as returned by the repository.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: entity::post::Model,
    pub author: entity::member::Model,
}

/// Fails with 403 unless `member` wrote the post owned by `author_id`.
pub fn ensure_author(author_id: i32, member: &AuthMember) -> Result<(), AppError> {
    if author_id == member.id {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        member.id,
        format!(
            "Member attempted to modify a post written by member {}",
            author_id
        ),
    )
    .into())
}

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub member_id: i32,
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    pub status: PostStatus,
    /// Normalized tag names
    pub tags: Vec<String>,
}

impl CreatePostParams {
    pub fn from_dto(member_id: i32, dto: CreatePostDto) -> Self {
        Self {
            member_id,
            title: dto.title,
            content: dto.content,
            category: dto.category,
            status: dto.status,
            tags: normalize_tag_names(dto.tag_list),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePostParams {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    pub status: PostStatus,
    /// Normalized tag names; replaces the post's tag set
    pub tags: Vec<String>,
}

impl UpdatePostParams {
    pub fn from_dto(id: i32, dto: UpdatePostDto) -> Self {
        Self {
            id,
            title: dto.title,
            content: dto.content,
            category: dto.category,
            status: dto.status,
            tags: normalize_tag_names(dto.tag_list),
        }
    }
}

/// Optional criteria combined with AND when listing posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    /// Field and trimmed, non-empty keyword to match, present only when both were given
    pub keyword: Option<(SearchType, String)>,
    pub category: Option<PostCategory>,
    pub status: Option<PostStatus>,
    /// Trimmed, non-empty tag name fragment
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSortField {
    Id,
    Title,
    CreatedAt,
    UpdatedAt,
    Category,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Ordering requested for a post listing. Ties are always broken by id, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostSort {
    pub field: PostSortField,
    pub direction: SortDirection,
}

impl Default for PostSort {
    fn default() -> Self {
        Self {
            field: PostSortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl FromStr for PostSort {
    type Err = AppError;

    /// Parses `property[,asc|desc]`. The direction defaults to ascending.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.split(',').map(str::trim);

        let field = match parts.next().unwrap_or_default() {
            "id" => PostSortField::Id,
            "title" => PostSortField::Title,
            "createdAt" => PostSortField::CreatedAt,
            "updatedAt" => PostSortField::UpdatedAt,
            "category" => PostSortField::Category,
            "status" => PostSortField::Status,
            other => {
                return Err(AppError::BadRequest(format!(
                    "Cannot sort posts by '{}'",
                    other
                )))
            }
        };

        let direction = match parts.next() {
            None | Some("") => SortDirection::Asc,
            Some(dir) if dir.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(dir) if dir.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            Some(dir) => {
                return Err(AppError::BadRequest(format!(
                    "Invalid sort direction '{}'",
                    dir
                )))
            }
        };

        if parts.next().is_some() {
            return Err(AppError::BadRequest(format!(
                "Invalid sort parameter '{}'",
                value
            )));
        }

        Ok(Self { field, direction })
    }
}

/// Everything needed to fetch one page of posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSearchParams {
    pub filter: PostFilter,
    pub sort: PostSort,
    /// Zero-based page index
    pub page: u64,
    pub per_page: u64,
}

impl PostSearchParams {
    /// Builds search params from the validated list query.
    ///
    /// # Returns
    /// - `Ok(PostSearchParams)` - Normalized criteria
    /// - `Err(AppError::BadRequest)` - The sort parameter names an unknown property or direction
    pub fn from_query(query: PostListQuery) -> Result<Self, AppError> {
        let keyword = match (query.search_type, non_blank(query.keyword)) {
            (Some(search_type), Some(keyword)) => Some((search_type, keyword)),
            _ => None,
        };

        let sort = query.sort.as_deref().unwrap_or(DEFAULT_SORT).parse()?;

        Ok(Self {
            filter: PostFilter {
                keyword,
                category: query.category,
                status: query.status,
                tag: non_blank(query.tag),
            },
            sort,
            page: query.page,
            per_page: query.size,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone)]
pub struct PaginatedPosts {
    pub posts: Vec<Post>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPosts {
    pub fn into_dto(self) -> PaginatedPostsDto {
        PaginatedPostsDto {
            posts: self.posts.into_iter().map(Post::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

impl From<entity::sea_orm_active_enums::PostCategory> for PostCategory {
    fn from(category: entity::sea_orm_active_enums::PostCategory) -> Self {
        use entity::sea_orm_active_enums::PostCategory as Db;
        match category {
            Db::Study => PostCategory::Study,
            Db::Work => PostCategory::Work,
            Db::Life => PostCategory::Life,
            Db::Exercise => PostCategory::Exercise,
        }
    }
}

impl From<PostCategory> for entity::sea_orm_active_enums::PostCategory {
    fn from(category: PostCategory) -> Self {
        match category {
            PostCategory::Study => Self::Study,
            PostCategory::Work => Self::Work,
            PostCategory::Life => Self::Life,
            PostCategory::Exercise => Self::Exercise,
        }
    }
}

impl From<entity::sea_orm_active_enums::PostStatus> for PostStatus {
    fn from(status: entity::sea_orm_active_enums::PostStatus) -> Self {
        use entity::sea_orm_active_enums::PostStatus as Db;
        match status {
            Db::Todo => PostStatus::Todo,
            Db::InProgress => PostStatus::InProgress,
            Db::Done => PostStatus::Done,
        }
    }
}

impl From<PostStatus> for entity::sea_orm_active_enums::PostStatus {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::Todo => Self::Todo,
            PostStatus::InProgress => Self::InProgress,
            PostStatus::Done => Self::Done,
        }
    }
}
