use crate::server::{
    data::shop::{ShopRepository, ShopTransactionRepository, WithdrawMethodRepository},
    model::shop::{NewTransaction, TransactionKind, WithdrawMethod},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod adjust_balance;
mod delete;
mod transactions;
mod withdraw_method;
