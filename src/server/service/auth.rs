use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::auth::MemberRole,
    server::{
        data::member::MemberRepository,
        error::{auth::AuthError, AppError},
        model::member::{CreateMemberParams, Member, SignInParams, SignUpParams},
        service::token::TokenService,
        util::password::{hash_password, verify_password},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Fails with 409 Conflict if the nickname is already registered
    pub async fn check_nickname(&self, nickname: &str) -> Result<(), AppError> {
        let repo = MemberRepository::new(self.db);

        if repo.exists_by_nickname(nickname).await? {
            return Err(AppError::Conflict("Nickname is already in use.".to_string()));
        }

        Ok(())
    }

    /// Fails with 409 Conflict if the email is already registered
    pub async fn check_email(&self, email: &str) -> Result<(), AppError> {
        let repo = MemberRepository::new(self.db);

        if repo.exists_by_email(email).await? {
            return Err(AppError::Conflict("Email is already in use.".to_string()));
        }

        Ok(())
    }

    /// Registers a new member with the `MEMBER` role.
    ///
    /// # Returns
    /// - `Ok(Member)` - Created member
    /// - `Err(AppError::BadRequest)` - Password contains the nickname or confirmation differs
    /// - `Err(AppError::Conflict)` - Nickname or email already registered
    pub async fn sign_up(&self, params: SignUpParams) -> Result<Member, AppError> {
        if let Some(violation) = params.password_violation() {
            return Err(AppError::BadRequest(violation.to_string()));
        }

        self.check_nickname(&params.nickname).await?;
        self.check_email(&params.email).await?;

        let password_hash = hash_password(&params.password)?;

        let member = MemberRepository::new(self.db)
            .create(CreateMemberParams {
                nickname: params.nickname,
                email: params.email,
                password_hash,
                role: MemberRole::Member,
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict("Nickname or email is already in use.".to_string())
                }
                _ => AppError::DbErr(err),
            })?;

        tracing::info!(member_id = member.id, "Member signed up");

        Ok(Member::from_entity(member))
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown nickname and wrong password fail identically with `InvalidCredentials`.
    pub async fn sign_in(&self, params: SignInParams) -> Result<String, AppError> {
        let Some(member) = MemberRepository::new(self.db)
            .find_by_nickname(&params.nickname)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&params.password, &member.password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&Member::from_entity(member))?;

        Ok(token)
    }
}
