use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        member::MemberRepository, post::PostRepository, post_tag::PostTagRepository,
        tag::TagRepository,
    },
    error::AppError,
    model::{
        auth::AuthMember,
        post::{
            ensure_author, CreatePostParams, PaginatedPosts, Post, PostSearchParams,
            UpdatePostParams,
        },
        tag::TagDiff,
    },
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a post and links its tags in one transaction.
    ///
    /// # Returns
    /// - `Ok(Post)` - Created post with author nickname and tags
    /// - `Err(AppError::NotFound)` - Author no longer exists
    pub async fn create(&self, params: CreatePostParams) -> Result<Post, AppError> {
        let txn = self.db.begin().await?;

        let Some(author) = MemberRepository::new(&txn)
            .find_by_id(params.member_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Member {} not found",
                params.member_id
            )));
        };

        let post = PostRepository::new(&txn).create(&params).await?;
        let tags = reconcile_tags(&txn, post.id, &params.tags).await?;

        txn.commit().await?;

        tracing::info!(post_id = post.id, member_id = author.id, "Post created");

        Ok(Post::from_entity(post, author.nickname, tags))
    }

    /// Gets a post by id with its author nickname and tags
    pub async fn get_by_id(&self, id: i32) -> Result<Post, AppError> {
        let Some(found) = PostRepository::new(self.db).find_by_id(id).await? else {
            return Err(post_not_found(id));
        };

        let tags = PostTagRepository::new(self.db)
            .find_tags_by_post_id(id)
            .await?
            .into_iter()
            .map(|tag| tag.name)
            .collect();

        Ok(Post::from_entity(found.post, found.author.nickname, tags))
    }

    /// Gets one page of posts matching the search criteria
    pub async fn get_paginated(
        &self,
        params: PostSearchParams,
    ) -> Result<PaginatedPosts, AppError> {
        let (rows, total) = PostRepository::new(self.db)
            .search(&params.filter, &params.sort, params.page, params.per_page)
            .await?;

        let post_ids: Vec<i32> = rows.iter().map(|row| row.post.id).collect();
        let mut tags_by_post = PostTagRepository::new(self.db)
            .find_tags_by_post_ids(&post_ids)
            .await?;

        let posts = rows
            .into_iter()
            .map(|row| {
                let tags = tags_by_post
                    .remove(&row.post.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|tag| tag.name)
                    .collect();
                Post::from_entity(row.post, row.author.nickname, tags)
            })
            .collect();

        let total_pages = if params.per_page > 0 {
            total.div_ceil(params.per_page)
        } else {
            0
        };

        Ok(PaginatedPosts {
            posts,
            total,
            page: params.page,
            per_page: params.per_page,
            total_pages,
        })
    }

    /// Updates a post written by `member` and replaces its tag set.
    ///
    /// Only tags that changed are linked or unlinked.
    ///
    /// # Returns
    /// - `Ok(Post)` - Updated post
    /// - `Err(AppError::NotFound)` - No post with the given id
    /// - `Err(AppError::AuthErr)` - `member` is not the author (403)
    pub async fn update(
        &self,
        member: &AuthMember,
        params: UpdatePostParams,
    ) -> Result<Post, AppError> {
        let txn = self.db.begin().await?;
        let repo = PostRepository::new(&txn);

        let Some(existing) = repo.find_by_id(params.id).await? else {
            return Err(post_not_found(params.id));
        };
        ensure_author(existing.post.member_id, member)?;

        let post = repo.update(&params).await?;
        let tags = reconcile_tags(&txn, post.id, &params.tags).await?;

        txn.commit().await?;

        tracing::info!(post_id = post.id, member_id = member.id, "Post updated");

        Ok(Post::from_entity(post, existing.author.nickname, tags))
    }

    /// Deletes a post written by `member` along with its tag links
    pub async fn delete(&self, member: &AuthMember, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = PostRepository::new(&txn);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Err(post_not_found(id));
        };
        ensure_author(existing.post.member_id, member)?;

        PostTagRepository::new(&txn).delete_by_post_id(id).await?;
        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!(post_id = id, member_id = member.id, "Post deleted");

        Ok(())
    }
}

fn post_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Post {} not found", id))
}

/// Brings the post's tag links in line with `requested` and returns the resulting tag names.
async fn reconcile_tags<C: ConnectionTrait>(
    db: &C,
    post_id: i32,
    requested: &[String],
) -> Result<Vec<String>, AppError> {
    let post_tags = PostTagRepository::new(db);

    let linked = post_tags.find_tags_by_post_id(post_id).await?;
    let linked_names: Vec<String> = linked.iter().map(|tag| tag.name.clone()).collect();

    let diff = TagDiff::between(&linked_names, requested);
    if diff.is_empty() {
        return Ok(linked_names);
    }

    if !diff.to_remove.is_empty() {
        let tag_ids: Vec<i32> = linked
            .iter()
            .filter(|tag| diff.to_remove.contains(&tag.name))
            .map(|tag| tag.id)
            .collect();
        post_tags.unlink(post_id, &tag_ids).await?;
    }

    if !diff.to_add.is_empty() {
        let tag_ids: Vec<i32> = TagRepository::new(db)
            .find_or_create_by_names(&diff.to_add)
            .await?
            .into_iter()
            .map(|tag| tag.id)
            .collect();
        post_tags.link(post_id, &tag_ids).await?;
    }

    let tags = post_tags
        .find_tags_by_post_id(post_id)
        .await?
        .into_iter()
        .map(|tag| tag.name)
        .collect();

    Ok(tags)
}
