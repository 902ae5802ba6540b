use super::*;

/// Tests that only running events inside their window are listed.
///
/// Creates a live event, one not started yet, one already past its finish
/// date and one already ended.
///
/// Expected: Ok with only the live event
#[tokio::test]
async fn returns_only_live_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::create_shop(db).await?;
    let category = factory::create_category(db).await?;
    let now = Utc::now();

    let live = factory::create_event(db, shop.id, category.id).await?;
    factory::event::EventFactory::new(db, shop.id, category.id)
        .start_date(now + Duration::hours(1))
        .finish_date(now + Duration::days(2))
        .build()
        .await?;
    factory::event::EventFactory::new(db, shop.id, category.id)
        .start_date(now - Duration::days(2))
        .finish_date(now - Duration::hours(1))
        .build()
        .await?;
    factory::event::EventFactory::new(db, shop.id, category.id)
        .status("ended")
        .build()
        .await?;

    let events = EventRepository::new(db).get_running(now).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, live.id);
    assert_eq!(events[0].status, EventStatus::Running);

    Ok(())
}
