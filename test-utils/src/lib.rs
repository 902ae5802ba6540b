//! Marketplace Test Utils
//!
//! Shared testing utilities for the marketplace backend. Tests get an in-memory
//! SQLite database with exactly the tables they need, an optional session backed
//! by the same database, and factories that insert entities with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories for inserting test data
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn places_order() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_order_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (shop, product) = factory::helpers::create_product_with_dependencies(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
