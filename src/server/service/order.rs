//! Order placement and the order lifecycle.
//!
//! Every status move goes through [`OrderService::transition`], which checks
//! ownership and the transition table, then applies the side effects of the
//! target status (stock restore, settlement, refund debit) in the same
//! database transaction as the status write.

use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::order::{OrderStatus, PaymentStatus, PaymentType},
    server::{
        data::{
            coupon::CouponRepository,
            delivery_man::DeliveryManRepository,
            order::OrderRepository,
            product::ProductRepository,
            shop::{ShopRepository, ShopTransactionRepository},
        },
        error::AppError,
        model::{
            coupon::{CouponRejection, PricedLine},
            order::{
                seller_credit, Actor, NewOrder, NewOrderItem, Order, OrderFilter, OrderItem,
                OrderUpdate, PlaceOrderParams, ShippingAddress,
            },
            pagination::Paginated,
            product::Product,
            shop::{NewTransaction, TransactionKind},
        },
        state::SettlementSettings,
        util::validate::{require_non_empty, validate_page},
    },
};

/// One shop's share of a cart, with quantities merged per product.
#[derive(Default)]
struct ShopCart {
    lines: Vec<(Product, i32)>,
    coupon: Option<String>,
}

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    settlement: SettlementSettings,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection, settlement: SettlementSettings) -> Self {
        Self { db, settlement }
    }

    /// Places a cart as one order per shop.
    ///
    /// Products are loaded and stock is checked inside the transaction, so two
    /// concurrent checkouts cannot both take the last unit. Nothing is written
    /// unless every line and coupon is valid.
    ///
    /// # Returns
    /// - `Ok(Vec<Order>)` - The created orders, one per shop, ordered by shop ID
    /// - `Err(AppError::NotFound)` - A product does not exist or was deleted
    /// - `Err(AppError::BadRequest)` - Empty cart, bad quantity, insufficient
    ///   stock, unusable coupon or missing card reference
    pub async fn place_order(&self, params: PlaceOrderParams) -> Result<Vec<Order>, AppError> {
        if params.cart.is_empty() {
            return Err(AppError::BadRequest("Cart is empty".to_string()));
        }

        let payment_reference = match params.payment_type {
            PaymentType::Card => Some(require_non_empty(
                "Payment reference",
                params.payment_reference.as_deref().unwrap_or_default(),
            )?),
            PaymentType::CashOnDelivery => None,
        };
        let shipping_address = validate_address(params.shipping_address.clone())?;

        let txn = self.db.begin().await?;
        let carts = group_by_shop(&txn, &params).await?;

        let products = ProductRepository::new(&txn);
        let orders = OrderRepository::new(&txn);
        let mut placed = Vec::with_capacity(carts.len());

        for (shop_id, cart) in carts {
            let priced: Vec<PricedLine> = cart
                .lines
                .iter()
                .map(|(product, quantity)| PricedLine {
                    product_id: product.id,
                    amount: product.discount_price * *quantity as i64,
                })
                .collect();
            let subtotal = priced.iter().map(|line| line.amount).sum();

            let discount = match cart.coupon.as_deref() {
                Some(code) => coupon_discount(&txn, shop_id, code, &priced).await?,
                None => 0,
            };

            let items = cart
                .lines
                .iter()
                .map(|(product, quantity)| NewOrderItem {
                    product_id: product.id,
                    name: product.name.clone(),
                    unit_price: product.discount_price,
                    quantity: *quantity,
                    image_url: product.images.first().cloned(),
                })
                .collect();

            let order = orders
                .create(NewOrder {
                    user_id: params.user_id,
                    shop_id,
                    payment_type: params.payment_type,
                    payment_reference: payment_reference.clone(),
                    subtotal,
                    discount,
                    coupon_code: cart.coupon,
                    shipping_address: shipping_address.clone(),
                    items,
                })
                .await?;

            for (product, quantity) in &cart.lines {
                products.adjust_stock(product.id, *quantity).await?;
            }

            placed.push(order);
        }

        txn.commit().await?;

        tracing::info!(
            "User {} placed {} order(s): {:?}",
            params.user_id,
            placed.len(),
            placed.iter().map(|order| order.id).collect::<Vec<_>>()
        );

        Ok(placed)
    }

    pub async fn list_user_orders(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Order>, AppError> {
        let filter = OrderFilter {
            user_id: Some(user_id),
            ..Default::default()
        };

        self.list(filter, page, per_page).await
    }

    /// Gets one of the user's own orders.
    pub async fn get_user_order(&self, user_id: i32, order_id: i32) -> Result<Order, AppError> {
        find_for(self.db, order_id, Actor::User, user_id).await
    }

    /// Gets one of the shop's own orders.
    pub async fn get_shop_order(&self, shop_id: i32, order_id: i32) -> Result<Order, AppError> {
        find_for(self.db, order_id, Actor::Shop, shop_id).await
    }

    /// Cancels a `Processing` order and returns its units to stock.
    pub async fn cancel_order(
        &self,
        actor: Actor,
        actor_id: i32,
        order_id: i32,
    ) -> Result<Order, AppError> {
        self.transition(order_id, actor, actor_id, OrderStatus::Cancelled, None)
            .await
    }

    pub async fn request_refund(&self, user_id: i32, order_id: i32) -> Result<Order, AppError> {
        self.transition(
            order_id,
            Actor::User,
            user_id,
            OrderStatus::ProcessingRefund,
            None,
        )
        .await
    }

    /// Moves one of the shop's orders along the lifecycle.
    ///
    /// `delivery_man_id` is only accepted together with
    /// `TransferredToDeliveryPartner` and must name an active delivery-man.
    pub async fn update_status(
        &self,
        shop_id: i32,
        order_id: i32,
        status: OrderStatus,
        delivery_man_id: Option<i32>,
    ) -> Result<Order, AppError> {
        self.transition(order_id, Actor::Shop, shop_id, status, delivery_man_id)
            .await
    }

    /// Approves a refund: stock comes back and the settlement is clawed back.
    pub async fn approve_refund(&self, shop_id: i32, order_id: i32) -> Result<Order, AppError> {
        self.transition(
            order_id,
            Actor::Shop,
            shop_id,
            OrderStatus::RefundSuccess,
            None,
        )
        .await
    }

    /// Moves an order assigned to the delivery-man along the delivery steps.
    pub async fn update_delivery_status(
        &self,
        delivery_man_id: i32,
        order_id: i32,
        status: OrderStatus,
    ) -> Result<Order, AppError> {
        self.transition(order_id, Actor::DeliveryMan, delivery_man_id, status, None)
            .await
    }

    pub async fn list_shop_orders(
        &self,
        shop_id: i32,
        status: Option<OrderStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Order>, AppError> {
        let filter = OrderFilter {
            shop_id: Some(shop_id),
            status,
            ..Default::default()
        };

        self.list(filter, page, per_page).await
    }

    pub async fn list_delivery_orders(
        &self,
        delivery_man_id: i32,
        status: Option<OrderStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Order>, AppError> {
        let filter = OrderFilter {
            delivery_man_id: Some(delivery_man_id),
            status,
            ..Default::default()
        };

        self.list(filter, page, per_page).await
    }

    pub async fn list_all_orders(
        &self,
        status: Option<OrderStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Order>, AppError> {
        let filter = OrderFilter {
            status,
            ..Default::default()
        };

        self.list(filter, page, per_page).await
    }

    async fn list(
        &self,
        filter: OrderFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Order>, AppError> {
        validate_page(page, per_page)?;

        let (orders, total) = OrderRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        Ok(Paginated::new(orders, total, page, per_page))
    }

    /// Validates and applies a status move with its side effects.
    ///
    /// # Returns
    /// - `Ok(Order)` - The updated order
    /// - `Err(AppError::NotFound)` - No such order visible to the actor
    /// - `Err(AppError::BadRequest)` - Move not allowed for this actor, or an
    ///   unusable delivery-man assignment
    async fn transition(
        &self,
        order_id: i32,
        actor: Actor,
        actor_id: i32,
        next: OrderStatus,
        delivery_man_id: Option<i32>,
    ) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;
        let order = find_for(&txn, order_id, actor, actor_id).await?;

        if !order.status.can_transition(next, actor) {
            return Err(AppError::BadRequest(format!(
                "Cannot change order status from {} to {}",
                order.status.as_str(),
                next.as_str()
            )));
        }

        let mut update = OrderUpdate::status(next);

        if let Some(delivery_man_id) = delivery_man_id {
            if next != OrderStatus::TransferredToDeliveryPartner {
                return Err(AppError::BadRequest(
                    "A delivery man can only be assigned when handing the order over".to_string(),
                ));
            }

            let available = DeliveryManRepository::new(&txn)
                .find_by_id(delivery_man_id)
                .await?
                .is_some_and(|delivery_man| delivery_man.active);
            if !available {
                return Err(AppError::BadRequest(
                    "Delivery man does not exist or is inactive".to_string(),
                ));
            }

            update.delivery_man_id = Some(delivery_man_id);
        }

        match next {
            OrderStatus::Cancelled => {
                restore_stock(&txn, &order.items).await?;
            }
            OrderStatus::Delivered => {
                let credit = seller_credit(order.total_price, self.settlement.service_charge_percent);

                credit_shop(&txn, &order, TransactionKind::OrderSettlement, credit).await?;

                update.payment_status = Some(PaymentStatus::Succeeded);
                update.settled_amount = Some(credit);
                update.delivered_at = Some(Utc::now());
            }
            OrderStatus::RefundSuccess => {
                restore_stock(&txn, &order.items).await?;

                if order.settled_amount != 0 {
                    credit_shop(&txn, &order, TransactionKind::Refund, -order.settled_amount)
                        .await?;
                }

                update.payment_status = Some(PaymentStatus::Refunded);
                update.settled_amount = Some(0);
            }
            _ => {}
        }

        let updated = OrderRepository::new(&txn)
            .apply(order_id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        txn.commit().await?;

        tracing::info!(
            "Order {} moved from {} to {} by {:?} {}",
            order_id,
            order.status.as_str(),
            next.as_str(),
            actor,
            actor_id
        );

        Ok(updated)
    }
}

/// Loads an order if it is visible to the actor.
///
/// Users see their own orders, shops the orders placed with them and
/// delivery-men the orders assigned to them. Anything else is reported as
/// missing.
async fn find_for<C: sea_orm::ConnectionTrait>(
    db: &C,
    order_id: i32,
    actor: Actor,
    actor_id: i32,
) -> Result<Order, AppError> {
    OrderRepository::new(db)
        .find_by_id(order_id)
        .await?
        .filter(|order| match actor {
            Actor::User => order.user_id == actor_id,
            Actor::Shop => order.shop_id == actor_id,
            Actor::DeliveryMan => order.delivery_man_id == Some(actor_id),
        })
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))
}

/// Loads every cart line's product and groups the lines by shop.
///
/// Repeated products are merged so the stock check sees the full quantity.
/// Each shop accepts at most one coupon code.
async fn group_by_shop(
    txn: &DatabaseTransaction,
    params: &PlaceOrderParams,
) -> Result<BTreeMap<i32, ShopCart>, AppError> {
    let products = ProductRepository::new(txn);
    let mut carts: BTreeMap<i32, ShopCart> = BTreeMap::new();

    for line in &params.cart {
        if line.quantity < 1 {
            return Err(AppError::BadRequest(
                "Quantity must be at least 1".to_string(),
            ));
        }

        let product = products
            .find_by_id(line.product_id)
            .await?
            .filter(|product| !product.is_deleted())
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", line.product_id)))?;

        let cart = carts.entry(product.shop_id).or_default();

        if let Some(code) = &line.coupon {
            match &cart.coupon {
                Some(existing) if existing != code => {
                    return Err(AppError::BadRequest(
                        "Only one coupon can be used per shop".to_string(),
                    ));
                }
                _ => cart.coupon = Some(code.clone()),
            }
        }

        match cart.lines.iter_mut().find(|(p, _)| p.id == product.id) {
            Some((_, quantity)) => *quantity += line.quantity,
            None => cart.lines.push((product, line.quantity)),
        }
    }

    for cart in carts.values() {
        for (product, quantity) in &cart.lines {
            if product.stock < *quantity {
                return Err(AppError::BadRequest(format!(
                    "Insufficient stock for {}",
                    product.name
                )));
            }
        }
    }

    Ok(carts)
}

/// Discount a shop's coupon grants on its lines.
async fn coupon_discount(
    txn: &DatabaseTransaction,
    shop_id: i32,
    code: &str,
    lines: &[PricedLine],
) -> Result<i64, AppError> {
    let coupon = CouponRepository::new(txn)
        .find_by_code(code)
        .await?
        .filter(|coupon| coupon.shop_id == shop_id)
        .ok_or_else(|| AppError::BadRequest(format!("Coupon {} is not valid for this shop", code)))?;

    coupon.discount_for(lines).map_err(|rejection| match rejection {
        CouponRejection::BelowMinimum(min_amount) => AppError::BadRequest(format!(
            "Coupon {} requires a minimum order of {}",
            code, min_amount
        )),
        CouponRejection::ProductNotInOrder => AppError::BadRequest(format!(
            "Coupon {} only applies to a product that is not in the cart",
            code
        )),
    })
}

async fn restore_stock(txn: &DatabaseTransaction, items: &[OrderItem]) -> Result<(), AppError> {
    let products = ProductRepository::new(txn);

    for item in items {
        products.adjust_stock(item.product_id, -item.quantity).await?;
    }

    Ok(())
}

/// Moves a signed amount into the order's shop balance and records it.
async fn credit_shop(
    txn: &DatabaseTransaction,
    order: &Order,
    kind: TransactionKind,
    amount: i64,
) -> Result<(), AppError> {
    ShopRepository::new(txn)
        .adjust_balance(order.shop_id, amount)
        .await?
        .ok_or_else(|| AppError::NotFound("Shop not found".to_string()))?;

    ShopTransactionRepository::new(txn)
        .create(NewTransaction {
            shop_id: order.shop_id,
            kind,
            amount,
            order_id: Some(order.id),
            withdraw_request_id: None,
        })
        .await?;

    Ok(())
}

fn validate_address(mut address: ShippingAddress) -> Result<ShippingAddress, AppError> {
    address.name = require_non_empty("Recipient name", &address.name)?;
    address.phone = require_non_empty("Phone", &address.phone)?;
    address.city = require_non_empty("City", &address.city)?;
    address.address1 = require_non_empty("Address", &address.address1)?;
    address.zip_code = require_non_empty("Zip code", &address.zip_code)?;

    Ok(address)
}
