use sea_orm::entity::prelude::*;

/// Role granted to a member. Stored as its upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum MemberRole {
    #[sea_orm(string_value = "MEMBER")]
    Member,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PostCategory {
    #[sea_orm(string_value = "STUDY")]
    Study,
    #[sea_orm(string_value = "WORK")]
    Work,
    #[sea_orm(string_value = "LIFE")]
    Life,
    #[sea_orm(string_value = "EXERCISE")]
    Exercise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PostStatus {
    #[sea_orm(string_value = "TODO")]
    Todo,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "DONE")]
    Done,
}
