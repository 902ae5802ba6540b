use super::*;

/// Tests the expiry sweep.
///
/// Verifies running events past their finish date become `ended` while live
/// events are left running.
///
/// Expected: Ok(1) with the expired event ended and the live one running
#[tokio::test]
async fn ends_only_finished_running_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::create_shop(db).await?;
    let category = factory::create_category(db).await?;
    let now = Utc::now();

    let expired = factory::event::EventFactory::new(db, shop.id, category.id)
        .start_date(now - Duration::days(2))
        .finish_date(now - Duration::minutes(1))
        .build()
        .await?;
    let live = factory::create_event(db, shop.id, category.id).await?;

    let repo = EventRepository::new(db);
    let ended = repo.end_finished(now).await?;

    assert_eq!(ended, 1);

    let events = repo.get_by_shop(shop.id).await?;
    let status_of = |id: i32| events.iter().find(|e| e.id == id).map(|e| e.status);
    assert_eq!(status_of(expired.id), Some(EventStatus::Ended));
    assert_eq!(status_of(live.id), Some(EventStatus::Running));

    assert_eq!(repo.end_finished(now).await?, 0);

    Ok(())
}
