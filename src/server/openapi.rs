//! OpenAPI document and Swagger UI.
//!
//! The document is served at `/api-docs/openapi.json` and browsable at `/swagger-ui`.
//! New endpoints need their handler listed under `paths(...)` and their DTOs under
//! `components(schemas(...))`.

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        auth::{MemberRole, SignInDto, SignInResponseDto, SignUpDto},
        post::{
            CreatePostDto, PaginatedPostsDto, PostCategory, PostDto, PostStatus, SearchType,
            UpdatePostDto,
        },
    },
    server::controller::{auth, post},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Simpleboard API",
        version = "0.1.0",
        description = "Message board with member accounts, bearer-token authentication, tagged posts and filtered search."
    ),
    tags(
        (name = "auth", description = "Sign-up, sign-in and availability checks"),
        (name = "post", description = "Post management and search"),
    ),
    paths(
        auth::check_nickname,
        auth::check_email,
        auth::sign_up,
        auth::sign_in,
        post::create_post,
        post::get_post,
        post::get_posts,
        post::update_post,
        post::delete_post,
    ),
    components(schemas(
        ErrorDto,
        ValidationErrorDto,
        MemberRole,
        SignUpDto,
        SignInDto,
        SignInResponseDto,
        PostCategory,
        PostStatus,
        SearchType,
        CreatePostDto,
        UpdatePostDto,
        PostDto,
        PaginatedPostsDto,
    )),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/v1/auth/sign-in"))
                        .build(),
                ),
            )
        }
    }
}

/// Mounts Swagger UI at `/swagger-ui` and the JSON document at `/api-docs/openapi.json`.
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
