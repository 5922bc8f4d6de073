use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{check_email, check_nickname, sign_in, sign_up},
        post::{create_post, delete_post, get_post, get_posts, update_post},
    },
    openapi::swagger_ui_router,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/check-nickname", get(check_nickname))
        .route("/api/v1/auth/check-email", get(check_email))
        .route("/api/v1/auth/sign-up", post(sign_up))
        .route("/api/v1/auth/sign-in", post(sign_in))
        .route("/api/v1/post", post(create_post).get(get_posts))
        .route(
            "/api/v1/post/{post_id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .merge(swagger_ui_router())
}
