use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::event::EventService};

/// Starts the event expiry scheduler.
///
/// Runs at the top of every minute and ends each running event whose finish
/// date has passed, so it drops out of the public event listing.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = end_finished_events(&db).await {
                tracing::error!("Error ending finished events: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Event expiry scheduler started");

    Ok(scheduler)
}

async fn end_finished_events(db: &DatabaseConnection) -> Result<(), AppError> {
    let ended = EventService::new(db).end_finished(Utc::now()).await?;

    if ended > 0 {
        tracing::info!("Ended {} finished event(s)", ended);
    }

    Ok(())
}
