use crate::server::{data::coupon::CouponRepository, model::coupon::CreateCouponParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_owned;
