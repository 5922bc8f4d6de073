use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct PostTagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostTagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the tags linked to a post in the order they were linked
    pub async fn find_tags_by_post_id(
        &self,
        post_id: i32,
    ) -> Result<Vec<entity::tag::Model>, DbErr> {
        let mut tags = self.find_tags_by_post_ids(&[post_id]).await?;

        Ok(tags.remove(&post_id).unwrap_or_default())
    }

    /// Gets the tags of several posts at once, keyed by post id
    ///
    /// Posts without tags have no entry in the map.
    pub async fn find_tags_by_post_ids(
        &self,
        post_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::tag::Model>>, DbErr> {
        let mut tags_by_post: HashMap<i32, Vec<entity::tag::Model>> = HashMap::new();
        if post_ids.is_empty() {
            return Ok(tags_by_post);
        }

        let links = entity::prelude::PostTag::find()
            .find_also_related(entity::prelude::Tag)
            .filter(entity::post_tag::Column::PostId.is_in(post_ids.iter().copied()))
            .order_by_asc(entity::post_tag::Column::Id)
            .all(self.db)
            .await?;

        for (link, tag) in links {
            if let Some(tag) = tag {
                tags_by_post.entry(link.post_id).or_default().push(tag);
            }
        }

        Ok(tags_by_post)
    }

    pub async fn link(&self, post_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        for tag_id in tag_ids {
            entity::post_tag::ActiveModel {
                post_id: ActiveValue::Set(post_id),
                tag_id: ActiveValue::Set(*tag_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Removes links between a post and the given tags, returning rows deleted
    pub async fn unlink(&self, post_id: i32, tag_ids: &[i32]) -> Result<u64, DbErr> {
        if tag_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::PostTag::delete_many()
            .filter(entity::post_tag::Column::PostId.eq(post_id))
            .filter(entity::post_tag::Column::TagId.is_in(tag_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_post_id(&self, post_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PostTag::delete_many()
            .filter(entity::post_tag::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
