use super::*;

/// Tests that a shop's ledger lists its own rows, newest first.
///
/// Expected: Ok with the withdrawal before the settlement and no foreign rows
#[tokio::test]
async fn lists_shop_ledger_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::create_shop(db).await?;
    let other = factory::create_shop(db).await?;
    let repo = ShopTransactionRepository::new(db);

    repo.create(NewTransaction {
        shop_id: shop.id,
        kind: TransactionKind::OrderSettlement,
        amount: 900,
        order_id: None,
        withdraw_request_id: None,
    })
    .await?;
    repo.create(NewTransaction {
        shop_id: shop.id,
        kind: TransactionKind::Withdrawal,
        amount: -500,
        order_id: None,
        withdraw_request_id: None,
    })
    .await?;
    repo.create(NewTransaction {
        shop_id: other.id,
        kind: TransactionKind::OrderSettlement,
        amount: 100,
        order_id: None,
        withdraw_request_id: None,
    })
    .await?;

    let ledger = repo.get_by_shop(shop.id).await?;

    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger[0].kind, TransactionKind::Withdrawal);
    assert_eq!(ledger[0].amount, -500);
    assert_eq!(ledger[1].kind, TransactionKind::OrderSettlement);

    Ok(())
}
