//! HTTP request handlers.
//!
//! Controllers resolve the caller through `AuthGuard`, convert DTOs into
//! parameter types, call one service and convert the result back into a DTO.
//! Every handler carries a `#[utoipa::path]` annotation collected by
//! `router::ApiDoc`.

pub mod auth;
pub mod banner;
pub mod category;
pub mod coupon;
pub mod delivery_man;
pub mod event;
pub mod health;
pub mod order;
pub mod product;
pub mod shop;
pub mod user;
pub mod withdraw;

use serde::Deserialize;

/// Zero-based page query accepted by every listing endpoint.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

pub(crate) fn default_entries() -> u64 {
    10
}
