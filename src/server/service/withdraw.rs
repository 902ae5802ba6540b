//! Seller payouts.
//!
//! The amount leaves `available_balance` when the request is made, so a shop
//! cannot request the same money twice while an admin reviews it. Rejection
//! puts it back.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::withdraw::WithdrawStatus,
    server::{
        data::{
            shop::{ShopRepository, ShopTransactionRepository, WithdrawMethodRepository},
            withdraw::WithdrawRequestRepository,
        },
        error::AppError,
        model::{
            pagination::Paginated,
            shop::{NewTransaction, TransactionKind},
            withdraw::WithdrawRequest,
        },
        state::SettlementSettings,
        util::validate::validate_page,
    },
};

pub struct WithdrawService<'a> {
    db: &'a DatabaseConnection,
    settlement: SettlementSettings,
}

impl<'a> WithdrawService<'a> {
    pub fn new(db: &'a DatabaseConnection, settlement: SettlementSettings) -> Self {
        Self { db, settlement }
    }

    /// Requests a payout of `amount` cents.
    ///
    /// The balance check runs inside the transaction that debits it.
    ///
    /// # Returns
    /// - `Ok(WithdrawRequest)` - The new `processing` request
    /// - `Err(AppError::BadRequest)` - No withdraw method, amount below the
    ///   minimum or above the available balance
    pub async fn request_withdrawal(
        &self,
        shop_id: i32,
        amount: i64,
    ) -> Result<WithdrawRequest, AppError> {
        if amount < self.settlement.min_withdraw_amount {
            return Err(AppError::BadRequest(format!(
                "Minimum withdrawal amount is {}",
                self.settlement.min_withdraw_amount
            )));
        }

        let txn = self.db.begin().await?;

        if WithdrawMethodRepository::new(&txn)
            .find_by_shop(shop_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(
                "Add a withdraw method before requesting a withdrawal".to_string(),
            ));
        }

        let shops = ShopRepository::new(&txn);
        let shop = shops
            .find_by_id(shop_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Shop not found".to_string()))?;

        if amount > shop.available_balance {
            return Err(AppError::BadRequest("Insufficient balance".to_string()));
        }

        shops.adjust_balance(shop_id, -amount).await?;
        let request = WithdrawRequestRepository::new(&txn)
            .create(shop_id, amount)
            .await?;
        ShopTransactionRepository::new(&txn)
            .create(NewTransaction {
                shop_id,
                kind: TransactionKind::Withdrawal,
                amount: -amount,
                order_id: None,
                withdraw_request_id: Some(request.id),
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Shop {} requested withdrawal {} of {}",
            shop_id,
            request.id,
            amount
        );

        Ok(request)
    }

    pub async fn list_withdrawals(&self, shop_id: i32) -> Result<Vec<WithdrawRequest>, AppError> {
        Ok(WithdrawRequestRepository::new(self.db)
            .get_by_shop(shop_id)
            .await?)
    }

    pub async fn list_all_withdrawals(
        &self,
        status: Option<WithdrawStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<WithdrawRequest>, AppError> {
        validate_page(page, per_page)?;

        let (requests, total) = WithdrawRequestRepository::new(self.db)
            .get_all_paginated(status, page, per_page)
            .await?;

        Ok(Paginated::new(requests, total, page, per_page))
    }

    /// Finalises a `processing` request.
    ///
    /// `rejected` re-credits the amount and records a compensating
    /// `withdrawal` transaction.
    ///
    /// # Returns
    /// - `Ok(WithdrawRequest)` - The finalised request
    /// - `Err(AppError::BadRequest)` - Target status is `processing`
    /// - `Err(AppError::Conflict)` - Request is already finalised
    /// - `Err(AppError::NotFound)` - No such request
    pub async fn update_withdrawal(
        &self,
        id: i32,
        status: WithdrawStatus,
    ) -> Result<WithdrawRequest, AppError> {
        if status == WithdrawStatus::Processing {
            return Err(AppError::BadRequest(
                "A withdrawal can only be marked succeeded or rejected".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let requests = WithdrawRequestRepository::new(&txn);

        let request = requests
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Withdrawal not found".to_string()))?;

        if !requests.finalise(id, status).await? {
            return Err(AppError::Conflict(
                "Withdrawal has already been processed".to_string(),
            ));
        }

        if status == WithdrawStatus::Rejected {
            ShopRepository::new(&txn)
                .adjust_balance(request.shop_id, request.amount)
                .await?;
            ShopTransactionRepository::new(&txn)
                .create(NewTransaction {
                    shop_id: request.shop_id,
                    kind: TransactionKind::Withdrawal,
                    amount: request.amount,
                    order_id: None,
                    withdraw_request_id: Some(id),
                })
                .await?;
        }

        let updated = requests
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Withdrawal not found".to_string()))?;

        txn.commit().await?;

        tracing::info!("Withdrawal {} marked {}", id, status.as_str());

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    async fn balance(db: &DatabaseConnection, shop_id: i32) -> i64 {
        ShopRepository::new(db)
            .find_by_id(shop_id)
            .await
            .unwrap()
            .unwrap()
            .available_balance
    }

    /// Tests a withdrawal from a shop with no bank details.
    ///
    /// Expected: Err(AppError::BadRequest), balance untouched
    #[tokio::test]
    async fn requires_withdraw_method() -> Result<(), AppError> {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let shop = factory::shop::ShopFactory::new(db)
            .available_balance(20_000)
            .build()
            .await?;

        let result = WithdrawService::new(db, SettlementSettings::default())
            .request_withdrawal(shop.id, 10_000)
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(balance(db, shop.id).await, 20_000);

        Ok(())
    }

    /// Tests the minimum amount and the balance ceiling.
    ///
    /// Expected: Err(AppError::BadRequest) for both
    #[tokio::test]
    async fn enforces_minimum_and_balance() -> Result<(), AppError> {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let shop = factory::shop::ShopFactory::new(db)
            .available_balance(8_000)
            .build()
            .await?;
        factory::shop::create_withdraw_method(db, shop.id).await?;
        let service = WithdrawService::new(db, SettlementSettings::default());

        let too_small = service.request_withdrawal(shop.id, 4_999).await;
        let too_large = service.request_withdrawal(shop.id, 8_001).await;

        assert!(matches!(too_small, Err(AppError::BadRequest(_))));
        assert!(matches!(too_large, Err(AppError::BadRequest(_))));
        assert_eq!(balance(db, shop.id).await, 8_000);

        Ok(())
    }

    /// Tests requesting then rejecting a withdrawal.
    ///
    /// Expected: balance debited then restored, ledger -amount then +amount,
    /// a second decision Err(AppError::Conflict)
    #[tokio::test]
    async fn rejection_recredits_balance() -> Result<(), AppError> {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let shop = factory::shop::ShopFactory::new(db)
            .available_balance(12_000)
            .build()
            .await?;
        factory::shop::create_withdraw_method(db, shop.id).await?;
        let service = WithdrawService::new(db, SettlementSettings::default());

        let request = service.request_withdrawal(shop.id, 7_000).await?;
        assert_eq!(request.status, WithdrawStatus::Processing);
        assert_eq!(balance(db, shop.id).await, 5_000);

        let rejected = service
            .update_withdrawal(request.id, WithdrawStatus::Rejected)
            .await?;
        assert_eq!(rejected.status, WithdrawStatus::Rejected);
        assert_eq!(balance(db, shop.id).await, 12_000);

        let mut amounts: Vec<i64> = ShopTransactionRepository::new(db)
            .get_by_shop(shop.id)
            .await?
            .into_iter()
            .map(|tx| tx.amount)
            .collect();
        amounts.sort();
        assert_eq!(amounts, vec![-7_000, 7_000]);

        let again = service
            .update_withdrawal(request.id, WithdrawStatus::Succeeded)
            .await;
        assert!(matches!(again, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Tests approving a withdrawal.
    ///
    /// Expected: status succeeded, balance stays debited
    #[tokio::test]
    async fn success_keeps_debit() -> Result<(), AppError> {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let shop = factory::shop::ShopFactory::new(db)
            .available_balance(6_000)
            .build()
            .await?;
        factory::shop::create_withdraw_method(db, shop.id).await?;
        let service = WithdrawService::new(db, SettlementSettings::default());

        let request = service.request_withdrawal(shop.id, 6_000).await?;
        let paid = service
            .update_withdrawal(request.id, WithdrawStatus::Succeeded)
            .await?;

        assert_eq!(paid.status, WithdrawStatus::Succeeded);
        assert_eq!(balance(db, shop.id).await, 0);

        Ok(())
    }
}
