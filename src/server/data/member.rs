use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::member::CreateMemberParams;

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a member with an already hashed password
    pub async fn create(&self, params: CreateMemberParams) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            email: ActiveValue::Set(params.email),
            nickname: ActiveValue::Set(params.nickname),
            password: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.into()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::Nickname.eq(nickname))
            .one(self.db)
            .await
    }

    pub async fn exists_by_nickname(&self, nickname: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Member::find()
            .filter(entity::member::Column::Nickname.eq(nickname))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Total number of registered members
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Member::find().count(self.db).await
    }
}
