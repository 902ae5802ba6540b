use super::*;

fn method(bank_name: &str) -> WithdrawMethod {
    WithdrawMethod {
        bank_name: bank_name.to_string(),
        bank_country: "US".to_string(),
        bank_swift_code: "BANKUS33".to_string(),
        account_number: "123".to_string(),
        account_holder_name: "Holder".to_string(),
        bank_address: "1 Bank St".to_string(),
    }
}

/// Tests that setting a withdraw method twice keeps a single row.
///
/// Expected: Ok with one method holding the second bank name
#[tokio::test]
async fn upsert_replaces_existing_method() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::create_shop(db).await?;
    let repo = WithdrawMethodRepository::new(db);

    repo.upsert(shop.id, method("First Bank")).await?;
    repo.upsert(shop.id, method("Second Bank")).await?;

    let stored = repo.find_by_shop(shop.id).await?.unwrap();
    assert_eq!(stored.bank_name, "Second Bank");
    assert_eq!(
        entity::prelude::ShopWithdrawMethod::find().count(db).await?,
        1
    );

    Ok(())
}

/// Tests deleting a withdraw method.
///
/// Expected: Ok(true) first, Ok(false) once nothing is left
#[tokio::test]
async fn delete_reports_whether_method_existed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::create_shop(db).await?;
    factory::shop::create_withdraw_method(db, shop.id).await?;
    let repo = WithdrawMethodRepository::new(db);

    assert!(repo.delete(shop.id).await?);
    assert!(!repo.delete(shop.id).await?);
    assert!(repo.find_by_shop(shop.id).await?.is_none());

    Ok(())
}
