use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        post::{CreatePostDto, PaginatedPostsDto, PostDto, PostListQuery, UpdatePostDto},
    },
    server::{
        error::AppError,
        middleware::validation::{ValidatedJson, ValidatedQuery},
        model::{
            auth::AuthMember,
            post::{CreatePostParams, PostSearchParams, UpdatePostParams},
        },
        service::post::PostService,
        state::AppState,
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

/// Create a new post.
///
/// Creates a post authored by the signed-in member. Tags are trimmed and
/// de-duplicated; unknown tags are created on the fly.
///
/// # Access Control
/// - `Member` - Requires a valid bearer token
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `member` - Signed-in member taken from the bearer token
/// - `payload` - Title, content, category, optional status and tag list
///
/// # Returns
/// - `201 Created` - Successfully created post
/// - `400 Bad Request` - Invalid post data
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - Author no longer exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/post",
    tag = POST_TAG,
    request_body = CreatePostDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Successfully created post", body = PostDto),
        (status = 400, description = "Invalid post data", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    member: AuthMember,
    ValidatedJson(payload): ValidatedJson<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let params = CreatePostParams::from_dto(member.id, payload);

    let post = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Get a single post.
///
/// # Returns
/// - `200 OK` - Post with author nickname and tags
/// - `404 Not Found` - No post with the given id
#[utoipa::path(
    get,
    path = "/api/v1/post/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post found", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let post = service.get_by_id(post_id).await?;

    Ok(Json(post.into_dto()))
}

/// List posts with optional filters.
///
/// Filters are combined with AND. The keyword is only applied together with a
/// `searchType`. Keyword and tag matching is a case-insensitive substring match.
/// Results are ordered by `sort` (default `createdAt,desc`) and then by id, newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Search type and keyword, category, status, tag, page, size and sort
///
/// # Returns
/// - `200 OK` - Page of posts with totals
/// - `400 Bad Request` - Invalid enum value, page size or sort property
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/post",
    tag = POST_TAG,
    params(PostListQuery),
    responses(
        (status = 200, description = "Page of posts", body = PaginatedPostsDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PostListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let params = PostSearchParams::from_query(query)?;

    let posts = service.get_paginated(params).await?;

    Ok(Json(posts.into_dto()))
}

/// Update a post.
///
/// Replaces title, content, category and status, and makes the post's tags match
/// `tagList` exactly. An empty list removes every tag.
///
/// # Access Control
/// - `Member` - Requires a valid bearer token
/// - Only the author may update the post
///
/// # Returns
/// - `200 OK` - Updated post
/// - `400 Bad Request` - Invalid post data
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `403 Forbidden` - Signed-in member is not the author
/// - `404 Not Found` - No post with the given id
#[utoipa::path(
    put,
    path = "/api/v1/post/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = UpdatePostDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully updated post", body = PostDto),
        (status = 400, description = "Invalid post data", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    member: AuthMember,
    Path(post_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let params = UpdatePostParams::from_dto(post_id, payload);

    let post = service.update(&member, params).await?;

    Ok(Json(post.into_dto()))
}

/// Delete a post.
///
/// # Access Control
/// - `Member` - Requires a valid bearer token
/// - Only the author may delete the post
///
/// # Returns
/// - `204 No Content` - Post and its tag links deleted
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `403 Forbidden` - Signed-in member is not the author
/// - `404 Not Found` - No post with the given id
#[utoipa::path(
    delete,
    path = "/api/v1/post/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Successfully deleted post"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    member: AuthMember,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    service.delete(&member, post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
