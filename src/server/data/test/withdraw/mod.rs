use crate::{model::withdraw::WithdrawStatus, server::data::withdraw::WithdrawRequestRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod finalise;
mod get_all_paginated;
