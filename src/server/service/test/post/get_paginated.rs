use super::*;
use crate::model::post::{PostListQuery, SearchType};

fn query() -> PostListQuery {
    PostListQuery {
        search_type: None,
        keyword: None,
        category: None,
        status: None,
        tag: None,
        page: 0,
        size: 5,
        sort: None,
    }
}

/// Tests page metadata and tag loading across a listing.
///
/// Expected: totals computed over all matches, tags attached per post
#[tokio::test]
async fn returns_page_with_totals_and_tags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let service = PostService::new(db);
    for i in 0..7 {
        let tags: &[&str] = if i % 2 == 0 { &["even"] } else { &[] };
        service.create(create_params(member.id, tags)).await?;
    }

    let mut q = query();
    q.page = 1;
    let page = service
        .get_paginated(PostSearchParams::from_query(q)?)
        .await?;

    assert_eq!(page.total, 7);
    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 5);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.posts.len(), 2);
    assert!(page
        .posts
        .iter()
        .all(|p| p.author_nickname == member.nickname));

    let tagged = PostSearchParams::from_query(PostListQuery {
        tag: Some("EVEN".to_string()),
        size: 10,
        ..query()
    })?;
    let page = service.get_paginated(tagged).await?;
    assert_eq!(page.total, 4);
    assert!(page.posts.iter().all(|p| p.tags == strings(&["even"])));

    Ok(())
}

/// Tests that a keyword without a search type is ignored.
///
/// Expected: every post returned
#[tokio::test]
async fn ignores_keyword_without_search_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let service = PostService::new(db);
    service.create(create_params(member.id, &[])).await?;
    service.create(create_params(member.id, &[])).await?;

    let ignored = PostSearchParams::from_query(PostListQuery {
        keyword: Some("nothing matches this".to_string()),
        ..query()
    })?;
    assert_eq!(service.get_paginated(ignored).await?.total, 2);

    let applied = PostSearchParams::from_query(PostListQuery {
        search_type: Some(SearchType::Title),
        keyword: Some("nothing matches this".to_string()),
        ..query()
    })?;
    let page = service.get_paginated(applied).await?;
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.posts.is_empty());

    Ok(())
}
