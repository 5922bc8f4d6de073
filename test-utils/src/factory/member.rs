//! Member factory for creating test member entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::MemberRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let member = MemberFactory::new(&db)
///     .nickname("writer")
///     .email("writer@example.com")
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    nickname: String,
    password: String,
    role: MemberRole,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - email: `"member{id}@example.com"`
    /// - nickname: `"member{id}"`
    /// - password: `"not-a-real-hash"` (override with a real hash for sign-in tests)
    /// - role: `MemberRole::Member`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("member{}@example.com", id),
            nickname: format!("member{}", id),
            password: "not-a-real-hash".to_string(),
            role: MemberRole::Member,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Sets the stored password value (expected to be a hash).
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            email: ActiveValue::Set(self.email),
            nickname: ActiveValue::Set(self.nickname),
            password: ActiveValue::Set(self.password),
            role: ActiveValue::Set(self.role),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
///
/// Shorthand for `MemberFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}
