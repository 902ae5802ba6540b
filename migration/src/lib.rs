pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_user_address_table;
mod m20260105_000003_create_shop_table;
mod m20260105_000004_create_shop_withdraw_method_table;
mod m20260105_000005_create_category_table;
mod m20260105_000006_create_subcategory_table;
mod m20260106_000007_create_product_table;
mod m20260106_000008_create_event_table;
mod m20260106_000009_create_coupon_table;
mod m20260106_000010_create_banner_table;
mod m20260107_000011_create_delivery_man_table;
mod m20260107_000012_create_order_table;
mod m20260107_000013_create_order_item_table;
mod m20260107_000014_create_product_review_table;
mod m20260108_000015_create_withdraw_request_table;
mod m20260108_000016_create_shop_transaction_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_user_address_table::Migration),
            Box::new(m20260105_000003_create_shop_table::Migration),
            Box::new(m20260105_000004_create_shop_withdraw_method_table::Migration),
            Box::new(m20260105_000005_create_category_table::Migration),
            Box::new(m20260105_000006_create_subcategory_table::Migration),
            Box::new(m20260106_000007_create_product_table::Migration),
            Box::new(m20260106_000008_create_event_table::Migration),
            Box::new(m20260106_000009_create_coupon_table::Migration),
            Box::new(m20260106_000010_create_banner_table::Migration),
            Box::new(m20260107_000011_create_delivery_man_table::Migration),
            Box::new(m20260107_000012_create_order_table::Migration),
            Box::new(m20260107_000013_create_order_item_table::Migration),
            Box::new(m20260107_000014_create_product_review_table::Migration),
            Box::new(m20260108_000015_create_withdraw_request_table::Migration),
            Box::new(m20260108_000016_create_shop_transaction_table::Migration),
        ]
    }
}
