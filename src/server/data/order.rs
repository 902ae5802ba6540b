//! Order and order item repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::{
    model::order::OrderStatus,
    server::model::order::{NewOrder, Order, OrderFilter, OrderItem, OrderUpdate},
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a `Processing` order and its items.
    ///
    /// `total_price` is `subtotal - discount`. Must run inside a transaction
    /// so a failing item insert does not leave an empty order behind.
    pub async fn create(&self, order: NewOrder) -> Result<Order, DbErr> {
        let now = Utc::now();
        let payment_status = order.payment_type.initial_status();
        let address = order.shipping_address;

        let entity = entity::order::ActiveModel {
            user_id: ActiveValue::Set(order.user_id),
            shop_id: ActiveValue::Set(order.shop_id),
            delivery_man_id: ActiveValue::Set(None),
            status: ActiveValue::Set(OrderStatus::Processing.as_str().to_string()),
            payment_status: ActiveValue::Set(payment_status.as_str().to_string()),
            payment_type: ActiveValue::Set(order.payment_type.as_str().to_string()),
            payment_reference: ActiveValue::Set(order.payment_reference),
            subtotal: ActiveValue::Set(order.subtotal),
            discount: ActiveValue::Set(order.discount),
            total_price: ActiveValue::Set(order.subtotal - order.discount),
            coupon_code: ActiveValue::Set(order.coupon_code),
            ship_name: ActiveValue::Set(address.name),
            ship_phone: ActiveValue::Set(address.phone),
            ship_country: ActiveValue::Set(address.country),
            ship_city: ActiveValue::Set(address.city),
            ship_address1: ActiveValue::Set(address.address1),
            ship_address2: ActiveValue::Set(address.address2),
            ship_zip_code: ActiveValue::Set(address.zip_code),
            settled_amount: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            delivered_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut items = Vec::with_capacity(order.items.len());
        for item in order.items {
            let item = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(entity.id),
                product_id: ActiveValue::Set(item.product_id),
                name: ActiveValue::Set(item.name),
                unit_price: ActiveValue::Set(item.unit_price),
                quantity: ActiveValue::Set(item.quantity),
                image_url: ActiveValue::Set(item.image_url),
                is_reviewed: ActiveValue::Set(false),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            items.push(item);
        }

        Ok(Order::from_entity(entity, items)?)
    }

    /// Finds an order with its items.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some(entity) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let items = self.items_for(&[entity.id]).await?.remove(&entity.id).unwrap_or_default();

        Ok(Some(Order::from_entity(entity, items)?))
    }

    /// Gets orders matching every set filter, newest first, with their items.
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Orders for the requested page and total matches
    pub async fn get_paginated(
        &self,
        filter: OrderFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Order>, u64), DbErr> {
        let paginator = Self::filtered(filter)
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let ids: Vec<i32> = entities.iter().map(|order| order.id).collect();
        let mut items = self.items_for(&ids).await?;

        let orders = entities
            .into_iter()
            .map(|order| {
                let order_items = items.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, order_items)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((orders, total))
    }

    /// Applies a status move and its accompanying column changes.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Updated order with items
    /// - `Ok(None)` - No order with that ID
    pub async fn apply(&self, id: i32, update: OrderUpdate) -> Result<Option<Order>, DbErr> {
        let Some(existing) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::order::ActiveModel = existing.into();
        active.status = ActiveValue::Set(update.status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        if let Some(payment_status) = update.payment_status {
            active.payment_status = ActiveValue::Set(payment_status.as_str().to_string());
        }
        if let Some(delivery_man_id) = update.delivery_man_id {
            active.delivery_man_id = ActiveValue::Set(Some(delivery_man_id));
        }
        if let Some(settled_amount) = update.settled_amount {
            active.settled_amount = ActiveValue::Set(settled_amount);
        }
        if let Some(delivered_at) = update.delivered_at {
            active.delivered_at = ActiveValue::Set(Some(delivered_at));
        }

        let entity = active.update(self.db).await?;
        let items = self.items_for(&[entity.id]).await?.remove(&entity.id).unwrap_or_default();

        Ok(Some(Order::from_entity(entity, items)?))
    }

    /// Counts orders matching every set filter.
    pub async fn count(&self, filter: OrderFilter) -> Result<u64, DbErr> {
        Self::filtered(filter).count(self.db).await
    }

    /// Counts orders assigned to a delivery-man that are handed over but not
    /// yet delivered.
    pub async fn count_in_flight_for_delivery_man(&self, delivery_man_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::DeliveryManId.eq(delivery_man_id))
            .filter(
                entity::order::Column::Status
                    .is_in(OrderStatus::in_flight().iter().map(OrderStatus::as_str)),
            )
            .count(self.db)
            .await
    }

    /// Finds the line of an order that holds `product_id`.
    pub async fn find_item(
        &self,
        order_id: i32,
        product_id: i32,
    ) -> Result<Option<OrderItem>, DbErr> {
        let entity = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .filter(entity::order_item::Column::ProductId.eq(product_id))
            .one(self.db)
            .await?;

        Ok(entity.map(OrderItem::from_entity))
    }

    /// Flags an order line as reviewed.
    ///
    /// # Returns
    /// - `Ok(true)` - Line flagged
    /// - `Ok(false)` - Line missing or already reviewed
    pub async fn mark_item_reviewed(&self, item_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::OrderItem::update_many()
            .filter(entity::order_item::Column::Id.eq(item_id))
            .filter(entity::order_item::Column::IsReviewed.eq(false))
            .col_expr(
                entity::order_item::Column::IsReviewed,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads the items of several orders keyed by order ID.
    async fn items_for(
        &self,
        order_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::order_item::Model>>, DbErr> {
        if order_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(order_ids.iter().copied()))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
        for item in items {
            grouped.entry(item.order_id).or_default().push(item);
        }

        Ok(grouped)
    }

    fn filtered(filter: OrderFilter) -> Select<entity::prelude::Order> {
        let mut query = entity::prelude::Order::find();

        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::order::Column::UserId.eq(user_id));
        }
        if let Some(shop_id) = filter.shop_id {
            query = query.filter(entity::order::Column::ShopId.eq(shop_id));
        }
        if let Some(delivery_man_id) = filter.delivery_man_id {
            query = query.filter(entity::order::Column::DeliveryManId.eq(delivery_man_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::order::Column::Status.eq(status.as_str()));
        }

        query
    }
}
