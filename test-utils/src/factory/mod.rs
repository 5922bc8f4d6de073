//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the
//! fields they care about. Each entity has a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::create_member(&db).await?;
//! let post = factory::create_post(&db, member.id).await?;
//! let tag = factory::create_tag(&db, "study").await?;
//! factory::link_tag(&db, post.id, tag.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let post = factory::post::PostFactory::new(&db, member.id)
//!     .title("Weekly plan")
//!     .category(PostCategory::Work)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod member;
pub mod post;
pub mod tag;

pub use member::create_member;
pub use post::create_post;
pub use tag::{create_tag, link_tag};
