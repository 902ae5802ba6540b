use crate::server::{
    data::product::{ProductRepository, ProductReviewRepository},
    model::product::{CreateReviewParams, ProductFilter},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod adjust_stock;
mod get_paginated;
mod reviews;
mod soft_delete;
