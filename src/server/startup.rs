use sea_orm::DatabaseConnection;

use crate::{
    model::post::{PostCategory, PostStatus},
    server::{
        config::Config,
        data::member::MemberRepository,
        error::AppError,
        model::{member::SignUpParams, post::CreatePostParams, tag::normalize_tag_names},
        service::{auth::AuthService, post::PostService},
        state::AppState,
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

const DEMO_PASSWORD: &str = "string";

/// Demo posts as (title, content, category, status, tags).
const DEMO_POSTS: [(&str, &str, PostCategory, PostStatus, &[&str]); 10] = [
    (
        "Learn Rust ownership",
        "Read the ownership and borrowing chapters.",
        PostCategory::Study,
        PostStatus::Done,
        &["rust", "study"],
    ),
    (
        "Async in practice",
        "Build a small tokio service end to end.",
        PostCategory::Study,
        PostStatus::InProgress,
        &["rust", "async"],
    ),
    (
        "Quarterly report",
        "Draft the numbers for the quarterly review.",
        PostCategory::Work,
        PostStatus::Todo,
        &["report"],
    ),
    (
        "Team retrospective",
        "Collect notes before Friday's retro.",
        PostCategory::Work,
        PostStatus::InProgress,
        &["meeting", "team"],
    ),
    (
        "Grocery run",
        "Milk, eggs, rice and coffee.",
        PostCategory::Life,
        PostStatus::Todo,
        &["errand"],
    ),
    (
        "Plan the weekend trip",
        "Book the cabin and check the weather.",
        PostCategory::Life,
        PostStatus::Done,
        &["travel"],
    ),
    (
        "Morning run",
        "5 km at an easy pace.",
        PostCategory::Exercise,
        PostStatus::Done,
        &["running", "health"],
    ),
    (
        "Strength training",
        "Squats, deadlifts and rows.",
        PostCategory::Exercise,
        PostStatus::Todo,
        &["gym", "health"],
    ),
    (
        "SQL indexing notes",
        "Compare composite and covering indexes.",
        PostCategory::Study,
        PostStatus::Todo,
        &["database", "study"],
    ),
    (
        "Code review backlog",
        "Go through the open pull requests.",
        PostCategory::Work,
        PostStatus::Todo,
        &[],
    ),
];

/// Inserts two demo members and ten posts when the database has no members yet.
///
/// Members `test` and `second` share the password `string`. Posts alternate between them.
///
/// # Returns
/// - `Ok(true)` - Demo data inserted
/// - `Ok(false)` - Members already exist, nothing inserted
pub async fn seed_demo_data(state: &AppState) -> Result<bool, AppError> {
    if MemberRepository::new(&state.db).count().await? > 0 {
        return Ok(false);
    }

    let auth_service = AuthService::new(&state.db, &state.tokens);
    let mut authors = Vec::new();
    for nickname in ["test", "second"] {
        let member = auth_service
            .sign_up(SignUpParams {
                nickname: nickname.to_string(),
                email: format!("{}@example.com", nickname),
                password: DEMO_PASSWORD.to_string(),
                password_check: DEMO_PASSWORD.to_string(),
            })
            .await?;
        authors.push(member.id);
    }

    let post_service = PostService::new(&state.db);
    for (index, (title, content, category, status, tags)) in DEMO_POSTS.iter().enumerate() {
        post_service
            .create(CreatePostParams {
                member_id: authors[index % authors.len()],
                title: title.to_string(),
                content: content.to_string(),
                category: *category,
                status: *status,
                tags: normalize_tag_names(tags.iter()),
            })
            .await?;
    }

    tracing::info!(
        members = authors.len(),
        posts = DEMO_POSTS.len(),
        "Seeded demo data"
    );

    Ok(true)
}
