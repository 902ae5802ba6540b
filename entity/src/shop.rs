use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shop")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub description: Option<String>,
    pub address: String,
    pub phone_number: String,
    pub zip_code: String,
    pub avatar: Option<String>,
    pub available_balance: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product::Entity")]
    Product,
    #[sea_orm(has_many = "super::event::Entity")]
    Event,
    #[sea_orm(has_many = "super::coupon::Entity")]
    Coupon,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
    #[sea_orm(has_one = "super::shop_withdraw_method::Entity")]
    ShopWithdrawMethod,
    #[sea_orm(has_many = "super::shop_transaction::Entity")]
    ShopTransaction,
    #[sea_orm(has_many = "super::withdraw_request::Entity")]
    WithdrawRequest,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::coupon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coupon.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::shop_withdraw_method::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopWithdrawMethod.def()
    }
}

impl Related<super::shop_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopTransaction.def()
    }
}

impl Related<super::withdraw_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WithdrawRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
