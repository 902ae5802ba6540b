use crate::{
    model::user::UserRole,
    server::{
        data::user::{UserAddressRepository, UserRepository},
        model::user::{CreateUserParams, UpsertAddressParams},
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod address;
mod create;
mod get_all_paginated;
mod set_role;
