//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep entities out of the business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so the same code runs against the
//! connection pool or inside a `DatabaseTransaction` opened by a service. Balance and
//! stock adjustments are read-modify-write and must be called inside a transaction.

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

#[cfg(test)]
mod test;
