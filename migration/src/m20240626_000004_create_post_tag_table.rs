use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240626_000002_create_post_table::Post, m20240626_000003_create_tag_table::Tag,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostTag::Table)
                    .if_not_exists()
                    .col(pk_auto(PostTag::Id))
                    .col(integer(PostTag::PostId))
                    .col(integer(PostTag::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_tag_post_id")
                            .from(PostTag::Table, PostTag::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_tag_tag_id")
                            .from(PostTag::Table, PostTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A post links each tag at most once
        manager
            .create_index(
                Index::create()
                    .name("idx_post_tag_post_id_tag_id")
                    .table(PostTag::Table)
                    .col(PostTag::PostId)
                    .col(PostTag::TagId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostTag {
    Table,
    Id,
    PostId,
    TagId,
}
