//! Domain models and operation parameter types.
//!
//! Domain models are built from SeaORM entities at the repository boundary
//! (`from_entity`) and turned into DTOs at the controller boundary (`into_dto`).
//! Parameter types carry validated-shape input from controllers into services
//! (`from_dto`). Status columns are stored as strings and parsed here into enums.

pub mod auth;
pub mod banner;
pub mod category;
pub mod coupon;
pub mod delivery_man;
pub mod event;
pub mod order;
pub mod pagination;
pub mod product;
pub mod shop;
pub mod user;
pub mod withdraw;
