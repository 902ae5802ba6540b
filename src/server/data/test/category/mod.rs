use crate::server::{data::category::CategoryRepository, model::category::CategoryParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
