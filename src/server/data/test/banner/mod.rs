use crate::server::{data::banner::BannerRepository, model::banner::BannerParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod update;
