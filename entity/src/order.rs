use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub shop_id: i32,
    pub delivery_man_id: Option<i32>,
    pub status: String,
    pub payment_status: String,
    pub payment_type: String,
    pub payment_reference: Option<String>,
    pub subtotal: i64,
    pub discount: i64,
    pub total_price: i64,
    pub coupon_code: Option<String>,
    pub ship_name: String,
    pub ship_phone: String,
    pub ship_country: String,
    pub ship_city: String,
    pub ship_address1: String,
    pub ship_address2: Option<String>,
    pub ship_zip_code: String,
    pub settled_amount: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub delivered_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::shop::Entity",
        from = "Column::ShopId",
        to = "super::shop::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Shop,
    #[sea_orm(
        belongs_to = "super::delivery_man::Entity",
        from = "Column::DeliveryManId",
        to = "super::delivery_man::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    DeliveryMan,
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::shop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shop.def()
    }
}

impl Related<super::delivery_man::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryMan.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
