use crate::server::{
    data::delivery_man::DeliveryManRepository,
    model::delivery_man::{CreateDeliveryManParams, UpdateDeliveryManParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
