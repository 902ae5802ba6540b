//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, ownership checks and the order status rules
//! - **Orchestration**: Coordinating multiple repository calls for one operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Every stock or balance change runs inside a
//!   `DatabaseTransaction` that is committed only when the whole operation succeeds

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
