//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::config::Config;

/// Marketplace money rules applied by the order and withdrawal services.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementSettings {
    /// Percent of an order's total withheld when it is delivered.
    pub service_charge_percent: i64,
    /// Smallest payout a seller may request, in cents.
    pub min_withdraw_amount: i64,
}

impl Default for SettlementSettings {
    fn default() -> Self {
        Self {
            service_charge_percent: 10,
            min_withdraw_amount: 5000,
        }
    }
}

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool
/// (clones share the pool) and the settings are `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    pub settlement: SettlementSettings,
}

impl AppState {
    /// Creates a new application state from the database pool and configuration.
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            settlement: SettlementSettings {
                service_charge_percent: config.service_charge_percent,
                min_withdraw_amount: config.min_withdraw_amount,
            },
        }
    }
}
