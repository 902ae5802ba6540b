use crate::server::{data::event::EventRepository, model::event::EventStatus};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod end_finished;
mod get_running;
