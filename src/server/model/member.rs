//! Member domain model and sign-up/sign-in parameters.

use crate::model::auth::{MemberRole, SignInDto, SignUpDto};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: i32,
    pub email: String,
    pub nickname: String,
    pub role: MemberRole,
}

impl Member {
    /// Converts a member entity into the domain model, dropping the password hash.
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            nickname: entity.nickname,
            role: entity.role.into(),
        }
    }
}

/// Sign-up request after field validation.
#[derive(Debug, Clone)]
pub struct SignUpParams {
    pub nickname: String,
    pub email: String,
    pub password: String,
    pub password_check: String,
}

impl SignUpParams {
    pub fn from_dto(dto: SignUpDto) -> Self {
        Self {
            nickname: dto.nickname,
            email: dto.email,
            password: dto.password,
            password_check: dto.password_check,
        }
    }

    /// Returns the first password rule the request breaks, if any.
    ///
    /// The password may not contain the nickname and must match its confirmation.
    pub fn password_violation(&self) -> Option<&'static str> {
        if self.password.contains(&self.nickname) {
            return Some("Password must not contain the nickname.");
        }

        if self.password != self.password_check {
            return Some("Password and password confirmation do not match.");
        }

        None
    }
}

/// Parameters for inserting a member whose password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateMemberParams {
    pub nickname: String,
    pub email: String,
    pub password_hash: String,
    pub role: MemberRole,
}

#[derive(Debug, Clone)]
pub struct SignInParams {
    pub nickname: String,
    pub password: String,
}

impl SignInParams {
    pub fn from_dto(dto: SignInDto) -> Self {
        Self {
            nickname: dto.nickname,
            password: dto.password,
        }
    }
}

impl From<entity::sea_orm_active_enums::MemberRole> for MemberRole {
    fn from(role: entity::sea_orm_active_enums::MemberRole) -> Self {
        match role {
            entity::sea_orm_active_enums::MemberRole::Member => MemberRole::Member,
        }
    }
}

impl From<MemberRole> for entity::sea_orm_active_enums::MemberRole {
    fn from(role: MemberRole) -> Self {
        match role {
            MemberRole::Member => entity::sea_orm_active_enums::MemberRole::Member,
        }
    }
}
