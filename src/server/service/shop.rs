use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        order::OrderRepository,
        shop::{ShopRepository, ShopTransactionRepository, WithdrawMethodRepository},
    },
    error::AppError,
    model::{
        order::OrderFilter,
        pagination::Paginated,
        shop::{Shop, ShopTransaction, UpdateShopParams, WithdrawMethod},
    },
    util::validate::{require_non_empty, validate_page},
};

pub struct ShopService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a shop by ID for the public storefront.
    pub async fn get_shop_info(&self, shop_id: i32) -> Result<Shop, AppError> {
        ShopRepository::new(self.db)
            .find_by_id(shop_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Shop not found".to_string()))
    }

    /// Gets the seller's own shop with its withdraw method.
    pub async fn get_own(&self, shop_id: i32) -> Result<(Shop, Option<WithdrawMethod>), AppError> {
        let shop = self.get_shop_info(shop_id).await?;
        let method = WithdrawMethodRepository::new(self.db)
            .find_by_shop(shop_id)
            .await?;

        Ok((shop, method))
    }

    pub async fn update_shop(
        &self,
        mut params: UpdateShopParams,
    ) -> Result<(Shop, Option<WithdrawMethod>), AppError> {
        params.name = require_non_empty("Shop name", &params.name)?;
        params.address = require_non_empty("Address", &params.address)?;
        params.phone_number = require_non_empty("Phone number", &params.phone_number)?;
        params.zip_code = require_non_empty("Zip code", &params.zip_code)?;
        let shop_id = params.shop_id;

        if ShopRepository::new(self.db).update(params).await?.is_none() {
            return Err(AppError::NotFound("Shop not found".to_string()));
        }

        self.get_own(shop_id).await
    }

    pub async fn set_withdraw_method(
        &self,
        shop_id: i32,
        method: WithdrawMethod,
    ) -> Result<WithdrawMethod, AppError> {
        require_non_empty("Bank name", &method.bank_name)?;
        require_non_empty("Account number", &method.account_number)?;
        require_non_empty("Account holder name", &method.account_holder_name)?;

        Ok(WithdrawMethodRepository::new(self.db)
            .upsert(shop_id, method)
            .await?)
    }

    pub async fn delete_withdraw_method(&self, shop_id: i32) -> Result<(), AppError> {
        if !WithdrawMethodRepository::new(self.db).delete(shop_id).await? {
            return Err(AppError::NotFound(
                "No withdraw method configured".to_string(),
            ));
        }

        Ok(())
    }

    /// Gets the shop's balance ledger, newest first.
    pub async fn list_transactions(&self, shop_id: i32) -> Result<Vec<ShopTransaction>, AppError> {
        Ok(ShopTransactionRepository::new(self.db)
            .get_by_shop(shop_id)
            .await?)
    }

    pub async fn list_shops(&self, page: u64, per_page: u64) -> Result<Paginated<Shop>, AppError> {
        validate_page(page, per_page)?;

        let (shops, total) = ShopRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(shops, total, page, per_page))
    }

    /// Deletes a shop together with its catalogue and ledger. Shops that have
    /// taken orders are kept.
    pub async fn delete_shop(&self, shop_id: i32) -> Result<(), AppError> {
        let filter = OrderFilter {
            shop_id: Some(shop_id),
            ..Default::default()
        };
        if OrderRepository::new(self.db).count(filter).await? > 0 {
            return Err(AppError::Conflict(
                "Shop has order history and cannot be deleted".to_string(),
            ));
        }

        let deleted = ShopRepository::new(self.db)
            .delete(shop_id)
            .await
            .map_err(|e| {
                AppError::from_db_conflict(e, "Shop has order history and cannot be deleted")
            })?;
        if !deleted {
            return Err(AppError::NotFound("Shop not found".to_string()));
        }

        tracing::info!("Deleted shop {}", shop_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests deleting a shop that has a delivered and settled order.
    ///
    /// Expected: Err(AppError::Conflict), the shop and its order kept
    #[tokio::test]
    async fn refuses_to_delete_shop_with_orders() -> Result<(), AppError> {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let (shop, _category, product) =
            factory::helpers::create_product_with_dependencies(db).await?;
        factory::order::OrderFactory::new(db, user.id, shop.id)
            .item(product.id, 2000, 1)
            .status("Delivered")
            .settled_amount(1900)
            .build()
            .await?;

        let result = ShopService::new(db).delete_shop(shop.id).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert!(ShopRepository::new(db).find_by_id(shop.id).await?.is_some());
        let filter = OrderFilter {
            shop_id: Some(shop.id),
            ..Default::default()
        };
        assert_eq!(OrderRepository::new(db).count(filter).await?, 1);

        Ok(())
    }

    /// Tests deleting a shop that never took an order.
    ///
    /// Expected: Ok, then NotFound on a second attempt
    #[tokio::test]
    async fn deletes_shop_without_orders() -> Result<(), AppError> {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (shop, _category, _product) =
            factory::helpers::create_product_with_dependencies(db).await?;
        let service = ShopService::new(db);

        service.delete_shop(shop.id).await?;

        assert!(matches!(
            service.delete_shop(shop.id).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
