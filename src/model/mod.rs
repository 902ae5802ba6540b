//! Wire types shared by every API endpoint.
//!
//! DTOs are plain serde structs with OpenAPI schemas. Server-side domain models
//! convert into and out of these at the controller boundary.

pub mod api;
pub mod auth;
pub mod banner;
pub mod category;
pub mod coupon;
pub mod delivery_man;
pub mod event;
pub mod order;
pub mod product;
pub mod shop;
pub mod user;
pub mod withdraw;
