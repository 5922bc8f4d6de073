use super::token_service;
use crate::server::{
    error::{auth::AuthError, AppError},
    model::member::{SignInParams, SignUpParams},
    service::auth::AuthService,
};
use test_utils::{builder::TestBuilder, factory};

mod sign_in;
mod sign_up;

fn sign_up_params(nickname: &str, email: &str, password: &str) -> SignUpParams {
    SignUpParams {
        nickname: nickname.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        password_check: password.to_string(),
    }
}
