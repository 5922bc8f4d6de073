use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, LikeExpr, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select,
};

use crate::{
    model::post::SearchType,
    server::model::post::{
        CreatePostParams, PostFilter, PostSort, PostSortField, PostWithAuthor, SortDirection,
        UpdatePostParams,
    },
};

pub struct PostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a post stamped with the current time. Tags are handled separately.
    pub async fn create(&self, params: &CreatePostParams) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            title: ActiveValue::Set(params.title.clone()),
            content: ActiveValue::Set(params.content.clone()),
            member_id: ActiveValue::Set(params.member_id),
            category: ActiveValue::Set(params.category.into()),
            status: ActiveValue::Set(params.status.into()),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a post together with its author
    pub async fn find_by_id(&self, id: i32) -> Result<Option<PostWithAuthor>, DbErr> {
        let result = entity::prelude::Post::find_by_id(id)
            .find_also_related(entity::prelude::Member)
            .one(self.db)
            .await?;

        result.map(into_post_with_author).transpose()
    }

    /// Overwrites the editable fields of a post and stamps `updated_at`
    pub async fn update(&self, params: &UpdatePostParams) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            title: ActiveValue::Set(params.title.clone()),
            content: ActiveValue::Set(params.content.clone()),
            category: ActiveValue::Set(params.category.into()),
            status: ActiveValue::Set(params.status.into()),
            updated_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Post::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets one page of posts matching `filter`, ordered by `sort` then id descending
    ///
    /// # Returns
    /// - `Ok((posts, total))` - Posts on the requested page and the number of matches overall
    pub async fn search(
        &self,
        filter: &PostFilter,
        sort: &PostSort,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<PostWithAuthor>, u64), DbErr> {
        let query = entity::prelude::Post::find()
            .find_also_related(entity::prelude::Member)
            .filter(filter_condition(filter));

        let query = match sort.direction {
            SortDirection::Asc => query.order_by_asc(sort_column(sort.field)),
            SortDirection::Desc => query.order_by_desc(sort_column(sort.field)),
        }
        .order_by_desc(entity::post::Column::Id);

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        let posts = rows
            .into_iter()
            .map(into_post_with_author)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((posts, total))
    }
}

fn into_post_with_author(
    (post, author): (entity::post::Model, Option<entity::member::Model>),
) -> Result<PostWithAuthor, DbErr> {
    let author = author.ok_or_else(|| {
        DbErr::RecordNotFound(format!(
            "Member {} referenced by post {} not found",
            post.member_id, post.id
        ))
    })?;

    Ok(PostWithAuthor { post, author })
}

fn sort_column(field: PostSortField) -> entity::post::Column {
    match field {
        PostSortField::Id => entity::post::Column::Id,
        PostSortField::Title => entity::post::Column::Title,
        PostSortField::CreatedAt => entity::post::Column::CreatedAt,
        PostSortField::UpdatedAt => entity::post::Column::UpdatedAt,
        PostSortField::Category => entity::post::Column::Category,
        PostSortField::Status => entity::post::Column::Status,
    }
}

/// Combines every present criterion with AND.
///
/// Keyword and tag matching use `LIKE`, which SQLite compares case-insensitively for ASCII.
fn filter_condition(filter: &PostFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some((search_type, keyword)) = &filter.keyword {
        condition = condition.add(match search_type {
            SearchType::Title => contains_literal(entity::post::Column::Title, keyword),
            SearchType::Content => contains_literal(entity::post::Column::Content, keyword),
            SearchType::Nickname => contains_literal(entity::member::Column::Nickname, keyword),
        });
    }

    if let Some(category) = filter.category {
        let category: entity::sea_orm_active_enums::PostCategory = category.into();
        condition = condition.add(entity::post::Column::Category.eq(category));
    }

    if let Some(status) = filter.status {
        let status: entity::sea_orm_active_enums::PostStatus = status.into();
        condition = condition.add(entity::post::Column::Status.eq(status));
    }

    if let Some(tag) = &filter.tag {
        condition = condition.add(entity::post::Column::Id.in_subquery(
            posts_tagged_like(tag).into_query(),
        ));
    }

    condition
}

/// Selects ids of posts linked to a tag whose name contains `fragment`.
fn posts_tagged_like(fragment: &str) -> Select<entity::post_tag::Entity> {
    entity::prelude::PostTag::find()
        .select_only()
        .column(entity::post_tag::Column::PostId)
        .inner_join(entity::prelude::Tag)
        .filter(contains_literal(entity::tag::Column::Name, fragment))
}

/// `column LIKE '%fragment%'` with `%`, `_` and `\` in `fragment` matched literally.
fn contains_literal<Col: ColumnTrait>(column: Col, fragment: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(fragment));
    Expr::col((column.entity_name(), column)).like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
