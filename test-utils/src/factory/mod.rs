//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*`
//! convenience function for quick default creation. Factories only insert the
//! entity itself; parents must already exist (see `helpers` for shortcuts that
//! create a full dependency chain).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let shop = factory::shop::ShopFactory::new(&db)
//!     .available_balance(10_000)
//!     .build()
//!     .await?;
//! let (shop, category, product) =
//!     factory::helpers::create_product_with_dependencies(&db).await?;
//! ```

pub mod banner;
pub mod category;
pub mod coupon;
pub mod delivery_man;
pub mod event;
pub mod helpers;
pub mod order;
pub mod product;
pub mod shop;
pub mod user;
pub mod withdraw_request;

pub use banner::create_banner;
pub use category::{create_category, create_subcategory};
pub use coupon::create_coupon;
pub use delivery_man::create_delivery_man;
pub use event::create_event;
pub use order::create_order;
pub use product::create_product;
pub use shop::create_shop;
pub use user::create_user;
pub use withdraw_request::create_withdraw_request;
