use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{delivery_man::DeliveryManRepository, order::OrderRepository},
    error::AppError,
    model::{
        delivery_man::{
            CreateDeliveryManParams, DeliveryMan, RegisterDeliveryManParams,
            UpdateDeliveryManParams,
        },
        pagination::Paginated,
    },
    util::{
        password::{hash_password, validate_password},
        validate::{normalize_email, require_non_empty, validate_page},
    },
};

pub struct DeliveryManService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeliveryManService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active delivery-man account.
    ///
    /// # Returns
    /// - `Ok(DeliveryMan)` - The new account
    /// - `Err(AppError::BadRequest)` - Empty name or phone, invalid email or short password
    /// - `Err(AppError::Conflict)` - Email already in use
    pub async fn create_delivery_man(
        &self,
        params: RegisterDeliveryManParams,
    ) -> Result<DeliveryMan, AppError> {
        let name = require_non_empty("Name", &params.name)?;
        let phone_number = require_non_empty("Phone number", &params.phone_number)?;
        let email = normalize_email(&params.email)?;
        validate_password(&params.password)?;

        let delivery_man = DeliveryManRepository::new(self.db)
            .create(CreateDeliveryManParams {
                name,
                email,
                password_hash: hash_password(&params.password)?,
                phone_number,
                vehicle: params.vehicle,
            })
            .await
            .map_err(|e| AppError::from_db_conflict(e, "Email is already registered"))?;

        tracing::info!("Created delivery man {}", delivery_man.id);

        Ok(delivery_man)
    }

    pub async fn list_delivery_men(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<DeliveryMan>, AppError> {
        validate_page(page, per_page)?;

        let (delivery_men, total) = DeliveryManRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(delivery_men, total, page, per_page))
    }

    /// Gets the signed-in delivery-man's own account.
    pub async fn me(&self, id: i32) -> Result<DeliveryMan, AppError> {
        DeliveryManRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Delivery man not found".to_string()))
    }

    pub async fn update_delivery_man(
        &self,
        mut params: UpdateDeliveryManParams,
    ) -> Result<DeliveryMan, AppError> {
        params.name = require_non_empty("Name", &params.name)?;
        params.phone_number = require_non_empty("Phone number", &params.phone_number)?;

        DeliveryManRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Delivery man not found".to_string()))
    }

    /// Deletes a delivery-man who has nothing out for delivery.
    ///
    /// Delivered and cancelled orders keep their history with the assignment cleared.
    ///
    /// # Returns
    /// - `Ok(())` - Deleted
    /// - `Err(AppError::Conflict)` - An in-flight order is assigned to them
    /// - `Err(AppError::NotFound)` - No such delivery-man
    pub async fn delete_delivery_man(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let in_flight = OrderRepository::new(&txn)
            .count_in_flight_for_delivery_man(id)
            .await?;
        if in_flight > 0 {
            return Err(AppError::Conflict(format!(
                "Delivery man still has {} order(s) in flight",
                in_flight
            )));
        }

        if !DeliveryManRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound("Delivery man not found".to_string()));
        }

        txn.commit().await?;

        tracing::info!("Deleted delivery man {}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn register(email: &str) -> RegisterDeliveryManParams {
        RegisterDeliveryManParams {
            name: "Rider".to_string(),
            email: email.to_string(),
            password: "correct horse battery".to_string(),
            phone_number: "555-0199".to_string(),
            vehicle: Some("Bike".to_string()),
        }
    }

    /// Tests creating two accounts whose emails differ only in case.
    ///
    /// Expected: email normalised, second create Err(AppError::Conflict)
    #[tokio::test]
    async fn duplicate_email_conflicts() -> Result<(), AppError> {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = DeliveryManService::new(db);

        let created = service
            .create_delivery_man(register("Rider@Example.com"))
            .await?;
        assert_eq!(created.email, "rider@example.com");
        assert!(created.active);

        let again = service
            .create_delivery_man(register("rider@example.com"))
            .await;
        assert!(matches!(again, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Tests deleting a delivery-man with an order on the way, then after delivery.
    ///
    /// Expected: Err(AppError::Conflict) first, Ok once the order is delivered
    #[tokio::test]
    async fn delete_blocked_while_in_flight() -> Result<(), AppError> {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let (shop, _category, product) =
            factory::helpers::create_product_with_dependencies(db).await?;
        let courier = factory::create_delivery_man(db).await?;
        factory::order::OrderFactory::new(db, user.id, shop.id)
            .item(product.id, 1_000, 1)
            .status("OnTheWay")
            .delivery_man_id(courier.id)
            .build()
            .await?;

        let service = DeliveryManService::new(db);
        let blocked = service.delete_delivery_man(courier.id).await;
        assert!(matches!(blocked, Err(AppError::Conflict(_))));

        let other = factory::create_delivery_man(db).await?;
        factory::order::OrderFactory::new(db, user.id, shop.id)
            .item(product.id, 1_000, 1)
            .status("Delivered")
            .delivery_man_id(other.id)
            .build()
            .await?;

        service.delete_delivery_man(other.id).await?;
        assert!(matches!(service.me(other.id).await, Err(AppError::NotFound(_))));

        Ok(())
    }
}
