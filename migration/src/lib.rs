pub use sea_orm_migration::prelude::*;

mod m20240626_000001_create_member_table;
mod m20240626_000002_create_post_table;
mod m20240626_000003_create_tag_table;
mod m20240626_000004_create_post_tag_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240626_000001_create_member_table::Migration),
            Box::new(m20240626_000002_create_post_table::Migration),
            Box::new(m20240626_000003_create_tag_table::Migration),
            Box::new(m20240626_000004_create_post_tag_table::Migration),
        ]
    }
}
