//! SimpleBoard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the board
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, plus factories for seeding members, posts and tags.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_post_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_board_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (member, post) = factory::helpers::create_post_with_author(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
