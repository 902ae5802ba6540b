//! SeaORM entity definitions for the marketplace schema.

pub mod prelude;

pub mod banner;
pub mod category;
pub mod coupon;
pub mod delivery_man;
pub mod event;
pub mod order;
pub mod order_item;
pub mod product;
pub mod product_review;
pub mod shop;
pub mod shop_transaction;
pub mod shop_withdraw_method;
pub mod subcategory;
pub mod user;
pub mod user_address;
pub mod withdraw_request;
