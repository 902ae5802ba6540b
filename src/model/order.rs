use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    Processing,
    TransferredToDeliveryPartner,
    Shipping,
    OnTheWay,
    Delivered,
    ProcessingRefund,
    RefundSuccess,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    CashOnDelivery,
    Card,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShippingAddressDto {
    pub name: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub address1: String,
    pub address2: Option<String>,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub unit_price: i64,
    pub quantity: i32,
    pub image_url: Option<String>,
    pub is_reviewed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub user_id: i32,
    pub shop_id: i32,
    pub delivery_man_id: Option<i32>,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_type: PaymentType,
    pub payment_reference: Option<String>,
    pub subtotal: i64,
    pub discount: i64,
    pub total_price: i64,
    pub coupon_code: Option<String>,
    pub shipping_address: ShippingAddressDto,
    pub items: Vec<OrderItemDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartLineDto {
    pub product_id: i32,
    pub quantity: i32,
    pub coupon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentDto {
    pub payment_type: PaymentType,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaceOrderDto {
    pub cart: Vec<CartLineDto>,
    pub shipping_address: ShippingAddressDto,
    pub payment: PaymentDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderStatusDto {
    pub status: OrderStatus,
    /// Delivery-man to assign when handing the order over.
    pub delivery_man_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateDeliveryStatusDto {
    pub status: OrderStatus,
}
