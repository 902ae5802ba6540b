use crate::{
    model::order::{OrderStatus, PaymentStatus, PaymentType},
    server::{
        data::order::OrderRepository,
        model::order::{NewOrder, NewOrderItem, OrderFilter, OrderUpdate, ShippingAddress},
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod apply;
mod count_in_flight;
mod create;
mod get_paginated;
mod items;
