use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_names(&self, names: &[String]) -> Result<Vec<entity::tag::Model>, DbErr> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.is_in(names.iter().cloned()))
            .all(self.db)
            .await
    }

    /// Returns the tags with the given names, inserting the ones that do not exist yet.
    ///
    /// Results follow the order of `names`. Names are matched exactly.
    pub async fn find_or_create_by_names(
        &self,
        names: &[String],
    ) -> Result<Vec<entity::tag::Model>, DbErr> {
        let mut tags = self.find_by_names(names).await?;

        for name in names {
            if tags.iter().any(|tag| &tag.name == name) {
                continue;
            }

            let tag = entity::tag::ActiveModel {
                name: ActiveValue::Set(name.clone()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            tags.push(tag);
        }

        tags.sort_by_key(|tag| names.iter().position(|name| name == &tag.name));

        Ok(tags)
    }
}
