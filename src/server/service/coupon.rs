use sea_orm::DatabaseConnection;

use crate::server::{
    data::{coupon::CouponRepository, product::ProductRepository},
    error::AppError,
    model::coupon::{Coupon, CreateCouponParams},
};

pub struct CouponService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CouponService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a percentage coupon for a shop.
    ///
    /// # Returns
    /// - `Ok(Coupon)` - Created coupon
    /// - `Err(AppError::BadRequest)` - Empty code, value outside 1..=100
    ///   or a product the shop does not own
    /// - `Err(AppError::Conflict)` - The code is taken
    pub async fn create_coupon(&self, params: CreateCouponParams) -> Result<Coupon, AppError> {
        if params.code.is_empty() {
            return Err(AppError::BadRequest(
                "Coupon code must not be empty".to_string(),
            ));
        }

        if !(1..=100).contains(&params.value) {
            return Err(AppError::BadRequest(
                "Coupon value must be between 1 and 100".to_string(),
            ));
        }

        if let Some(product_id) = params.product_id {
            let owned = ProductRepository::new(self.db)
                .find_owned(product_id, params.shop_id)
                .await?;

            if owned.is_none() {
                return Err(AppError::BadRequest(
                    "Coupon product must belong to the shop".to_string(),
                ));
            }
        }

        CouponRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::from_db_conflict(e, "Coupon code already exists"))
    }

    pub async fn list_shop_coupons(&self, shop_id: i32) -> Result<Vec<Coupon>, AppError> {
        Ok(CouponRepository::new(self.db).get_by_shop(shop_id).await?)
    }

    pub async fn delete_coupon(&self, id: i32, shop_id: i32) -> Result<(), AppError> {
        if !CouponRepository::new(self.db).delete_owned(id, shop_id).await? {
            return Err(AppError::NotFound("Coupon not found".to_string()));
        }

        Ok(())
    }

    /// Looks up a coupon by its exact, trimmed code.
    pub async fn get_coupon_by_code(&self, code: &str) -> Result<Coupon, AppError> {
        CouponRepository::new(self.db)
            .find_by_code(code.trim())
            .await?
            .ok_or_else(|| AppError::NotFound("Coupon not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn params(shop_id: i32, code: &str) -> CreateCouponParams {
        CreateCouponParams {
            shop_id,
            code: code.to_string(),
            value: 10,
            min_amount: None,
            max_amount: None,
            product_id: None,
        }
    }

    /// Tests that a code already used by any shop is rejected.
    ///
    /// Expected: Err(AppError::Conflict)
    #[tokio::test]
    async fn duplicate_code_conflicts() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = factory::create_shop(db).await?;
        let second = factory::create_shop(db).await?;
        let service = CouponService::new(db);

        service.create_coupon(params(first.id, "FRESH10")).await?;
        let result = service.create_coupon(params(second.id, "FRESH10")).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Tests the value range and product ownership rules.
    ///
    /// Expected: Err(AppError::BadRequest) for each
    #[tokio::test]
    async fn validates_fields() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_owner, _category, product) =
            factory::helpers::create_product_with_dependencies(db).await?;
        let shop = factory::create_shop(db).await?;
        let service = CouponService::new(db);

        let zero = service
            .create_coupon(CreateCouponParams {
                value: 0,
                ..params(shop.id, "ZERO")
            })
            .await;
        let foreign = service
            .create_coupon(CreateCouponParams {
                product_id: Some(product.id),
                ..params(shop.id, "FOREIGN")
            })
            .await;

        assert!(matches!(zero, Err(AppError::BadRequest(_))));
        assert!(matches!(foreign, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests a coupon whose discount cap sits below its minimum spend.
    ///
    /// Expected: Ok with both bounds stored as given
    #[tokio::test]
    async fn accepts_cap_below_minimum_spend() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let shop = factory::create_shop(db).await?;

        let coupon = CouponService::new(db)
            .create_coupon(CreateCouponParams {
                value: 10,
                min_amount: Some(5_000),
                max_amount: Some(500),
                ..params(shop.id, "BIGBASKET")
            })
            .await?;

        assert_eq!(coupon.min_amount, Some(5_000));
        assert_eq!(coupon.max_amount, Some(500));

        Ok(())
    }
}
