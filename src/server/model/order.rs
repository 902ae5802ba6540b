//! Order domain model and the order status state machine.
//!
//! Status moves are validated against [`OrderStatus::can_transition`]; anything
//! not listed there is rejected regardless of who asks.

use chrono::{DateTime, Utc};

use crate::{
    model::order::{
        CartLineDto, OrderDto, OrderItemDto, OrderStatus, PaymentStatus, PaymentType,
        PlaceOrderDto, ShippingAddressDto,
    },
    server::error::internal::InternalError,
};

/// Who is asking for a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    User,
    Shop,
    /// The delivery-man the order is assigned to.
    DeliveryMan,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::TransferredToDeliveryPartner => "TransferredToDeliveryPartner",
            Self::Shipping => "Shipping",
            Self::OnTheWay => "OnTheWay",
            Self::Delivered => "Delivered",
            Self::ProcessingRefund => "ProcessingRefund",
            Self::RefundSuccess => "RefundSuccess",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "Processing" => Ok(Self::Processing),
            "TransferredToDeliveryPartner" => Ok(Self::TransferredToDeliveryPartner),
            "Shipping" => Ok(Self::Shipping),
            "OnTheWay" => Ok(Self::OnTheWay),
            "Delivered" => Ok(Self::Delivered),
            "ProcessingRefund" => Ok(Self::ProcessingRefund),
            "RefundSuccess" => Ok(Self::RefundSuccess),
            "Cancelled" => Ok(Self::Cancelled),
            other => Err(InternalError::UnknownStatus {
                kind: "order status",
                value: other.to_string(),
            }),
        }
    }

    /// Whether `actor` may move an order from `self` to `next`.
    ///
    /// | From | To | Actor |
    /// |---|---|---|
    /// | Processing | TransferredToDeliveryPartner | shop |
    /// | Processing | Cancelled | user, shop |
    /// | TransferredToDeliveryPartner | Shipping | shop, delivery-man |
    /// | Shipping | OnTheWay | shop, delivery-man |
    /// | OnTheWay | Delivered | shop, delivery-man |
    /// | Delivered | ProcessingRefund | user |
    /// | ProcessingRefund | RefundSuccess | shop |
    pub fn can_transition(self, next: OrderStatus, actor: Actor) -> bool {
        use Actor as A;
        use OrderStatus as S;

        matches!(
            (self, next, actor),
            (S::Processing, S::TransferredToDeliveryPartner, A::Shop)
                | (S::Processing, S::Cancelled, A::User | A::Shop)
                | (
                    S::TransferredToDeliveryPartner,
                    S::Shipping,
                    A::Shop | A::DeliveryMan
                )
                | (S::Shipping, S::OnTheWay, A::Shop | A::DeliveryMan)
                | (S::OnTheWay, S::Delivered, A::Shop | A::DeliveryMan)
                | (S::Delivered, S::ProcessingRefund, A::User)
                | (S::ProcessingRefund, S::RefundSuccess, A::Shop)
        )
    }

    /// Every status that counts as in flight.
    pub fn in_flight() -> [OrderStatus; 3] {
        [
            Self::TransferredToDeliveryPartner,
            Self::Shipping,
            Self::OnTheWay,
        ]
    }
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Succeeded => "Succeeded",
            Self::Refunded => "Refunded",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "Pending" => Ok(Self::Pending),
            "Succeeded" => Ok(Self::Succeeded),
            "Refunded" => Ok(Self::Refunded),
            other => Err(InternalError::UnknownStatus {
                kind: "payment status",
                value: other.to_string(),
            }),
        }
    }
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CashOnDelivery => "cash_on_delivery",
            Self::Card => "card",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "cash_on_delivery" => Ok(Self::CashOnDelivery),
            "card" => Ok(Self::Card),
            other => Err(InternalError::UnknownStatus {
                kind: "payment type",
                value: other.to_string(),
            }),
        }
    }

    /// Payment status recorded at placement. Card payments are captured by
    /// the client before the order is submitted.
    pub fn initial_status(&self) -> PaymentStatus {
        match self {
            Self::CashOnDelivery => PaymentStatus::Pending,
            Self::Card => PaymentStatus::Succeeded,
        }
    }
}

/// Commission withheld from `total`, rounded down.
pub fn service_charge(total: i64, percent: i64) -> i64 {
    total * percent / 100
}

/// Amount credited to the seller for a delivered order.
pub fn seller_credit(total: i64, percent: i64) -> i64 {
    total - service_charge(total, percent)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShippingAddress {
    pub name: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub address1: String,
    pub address2: Option<String>,
    pub zip_code: String,
}

impl ShippingAddress {
    pub fn from_dto(dto: ShippingAddressDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            country: dto.country,
            city: dto.city,
            address1: dto.address1,
            address2: dto.address2,
            zip_code: dto.zip_code,
        }
    }

    pub fn into_dto(self) -> ShippingAddressDto {
        ShippingAddressDto {
            name: self.name,
            phone: self.phone,
            country: self.country,
            city: self.city,
            address1: self.address1,
            address2: self.address2,
            zip_code: self.zip_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub unit_price: i64,
    pub quantity: i32,
    pub image_url: Option<String>,
    pub is_reviewed: bool,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            name: entity.name,
            unit_price: entity.unit_price,
            quantity: entity.quantity,
            image_url: entity.image_url,
            is_reviewed: entity.is_reviewed,
        }
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            id: self.id,
            product_id: self.product_id,
            name: self.name,
            unit_price: self.unit_price,
            quantity: self.quantity,
            image_url: self.image_url,
            is_reviewed: self.is_reviewed,
        }
    }
}

/// One shop's part of a customer's checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
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
    pub shipping_address: ShippingAddress,
    /// Amount credited to the shop on delivery; zero until then and after a refund.
    pub settled_amount: i64,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Converts an order row and its item rows to a domain model.
    ///
    /// # Returns
    /// - `Ok(Order)` - Converted order
    /// - `Err(InternalError::UnknownStatus)` - A stored status string is not recognised
    pub fn from_entity(
        entity: entity::order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            shop_id: entity.shop_id,
            delivery_man_id: entity.delivery_man_id,
            status: OrderStatus::parse(&entity.status)?,
            payment_status: PaymentStatus::parse(&entity.payment_status)?,
            payment_type: PaymentType::parse(&entity.payment_type)?,
            payment_reference: entity.payment_reference,
            subtotal: entity.subtotal,
            discount: entity.discount,
            total_price: entity.total_price,
            coupon_code: entity.coupon_code,
            shipping_address: ShippingAddress {
                name: entity.ship_name,
                phone: entity.ship_phone,
                country: entity.ship_country,
                city: entity.ship_city,
                address1: entity.ship_address1,
                address2: entity.ship_address2,
                zip_code: entity.ship_zip_code,
            },
            settled_amount: entity.settled_amount,
            items: items.into_iter().map(OrderItem::from_entity).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            delivered_at: entity.delivered_at,
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            user_id: self.user_id,
            shop_id: self.shop_id,
            delivery_man_id: self.delivery_man_id,
            status: self.status,
            payment_status: self.payment_status,
            payment_type: self.payment_type,
            payment_reference: self.payment_reference,
            subtotal: self.subtotal,
            discount: self.discount,
            total_price: self.total_price,
            coupon_code: self.coupon_code,
            shipping_address: self.shipping_address.into_dto(),
            items: self.items.into_iter().map(OrderItem::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            delivered_at: self.delivered_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CartLine {
    pub product_id: i32,
    pub quantity: i32,
    pub coupon: Option<String>,
}

impl CartLine {
    fn from_dto(dto: CartLineDto) -> Self {
        Self {
            product_id: dto.product_id,
            quantity: dto.quantity,
            coupon: dto
                .coupon
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlaceOrderParams {
    pub user_id: i32,
    pub cart: Vec<CartLine>,
    pub shipping_address: ShippingAddress,
    pub payment_type: PaymentType,
    pub payment_reference: Option<String>,
}

impl PlaceOrderParams {
    pub fn from_dto(user_id: i32, dto: PlaceOrderDto) -> Self {
        Self {
            user_id,
            cart: dto.cart.into_iter().map(CartLine::from_dto).collect(),
            shipping_address: ShippingAddress::from_dto(dto.shipping_address),
            payment_type: dto.payment.payment_type,
            payment_reference: dto.payment.reference,
        }
    }
}

/// A fully priced order ready to insert.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i32,
    pub shop_id: i32,
    pub payment_type: PaymentType,
    pub payment_reference: Option<String>,
    pub subtotal: i64,
    pub discount: i64,
    pub coupon_code: Option<String>,
    pub shipping_address: ShippingAddress,
    pub items: Vec<NewOrderItem>,
}

/// An order line snapshot taken from the product at placement time.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: i32,
    pub name: String,
    pub unit_price: i64,
    pub quantity: i32,
    pub image_url: Option<String>,
}

/// Column changes applied together with a status move.
///
/// `None` fields are left as stored.
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub status: OrderStatus,
    pub payment_status: Option<PaymentStatus>,
    pub delivery_man_id: Option<i32>,
    pub settled_amount: Option<i64>,
    pub delivered_at: Option<DateTime<Utc>>,
}

impl OrderUpdate {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status,
            payment_status: None,
            delivery_man_id: None,
            settled_amount: None,
            delivered_at: None,
        }
    }
}

/// Filters for order listings, newest first.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub user_id: Option<i32>,
    pub shop_id: Option<i32>,
    pub delivery_man_id: Option<i32>,
    pub status: Option<OrderStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [OrderStatus; 8] = [
        OrderStatus::Processing,
        OrderStatus::TransferredToDeliveryPartner,
        OrderStatus::Shipping,
        OrderStatus::OnTheWay,
        OrderStatus::Delivered,
        OrderStatus::ProcessingRefund,
        OrderStatus::RefundSuccess,
        OrderStatus::Cancelled,
    ];

    const ACTORS: [Actor; 3] = [Actor::User, Actor::Shop, Actor::DeliveryMan];

    fn allowed() -> Vec<(OrderStatus, OrderStatus, Actor)> {
        use Actor as A;
        use OrderStatus as S;

        vec![
            (S::Processing, S::TransferredToDeliveryPartner, A::Shop),
            (S::Processing, S::Cancelled, A::User),
            (S::Processing, S::Cancelled, A::Shop),
            (S::TransferredToDeliveryPartner, S::Shipping, A::Shop),
            (S::TransferredToDeliveryPartner, S::Shipping, A::DeliveryMan),
            (S::Shipping, S::OnTheWay, A::Shop),
            (S::Shipping, S::OnTheWay, A::DeliveryMan),
            (S::OnTheWay, S::Delivered, A::Shop),
            (S::OnTheWay, S::Delivered, A::DeliveryMan),
            (S::Delivered, S::ProcessingRefund, A::User),
            (S::ProcessingRefund, S::RefundSuccess, A::Shop),
        ]
    }

    /// Tests every (from, to, actor) combination against the transition table.
    ///
    /// Expected: exactly the listed triples are allowed
    #[test]
    fn transition_table_is_exact() {
        let allowed = allowed();

        for from in ALL {
            for to in ALL {
                for actor in ACTORS {
                    assert_eq!(
                        from.can_transition(to, actor),
                        allowed.contains(&(from, to, actor)),
                        "{:?} -> {:?} by {:?}",
                        from,
                        to,
                        actor
                    );
                }
            }
        }
    }

    #[test]
    fn status_strings_round_trip() {
        for status in ALL {
            assert_eq!(OrderStatus::parse(status.as_str()).unwrap(), status);
        }
        assert!(OrderStatus::parse("Lost").is_err());
    }

    #[test]
    fn seller_credit_withholds_floored_charge() {
        assert_eq!(service_charge(1_999, 10), 199);
        assert_eq!(seller_credit(1_999, 10), 1_800);
        assert_eq!(seller_credit(1_000, 0), 1_000);
    }
}
