use crate::server::{
    error::{
        auth::{AuthError, Principal},
        AppError,
    },
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod require;
mod require_delivery_man;
mod require_shop;
