//! Background worker that turns raw click captures into persisted
//! click events.
//!
//! The redirect handler pushes [`ClickContext`] values onto a bounded
//! channel and returns immediately; this worker drains the channel,
//! enriches each event (user-agent classification, referrer
//! classification, geolocation) and writes one `link_clicks` row. Every
//! failure is logged and swallowed - nothing here can affect a redirect
//! that has already been sent, and nothing is retried.

use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, warn};

use crate::domain::click_context::ClickContext;
use crate::domain::entities::NewClick;
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;
use crate::infrastructure::geoip::GeoLocator;
use crate::utils::referrer::classify_referrer;
use crate::utils::user_agent::classify_user_agent;

/// Runs the click worker until the channel closes.
///
/// Events are processed on spawned tasks so a slow geolocation lookup for
/// one click does not delay the next; `concurrency` bounds how many
/// enrichments run at once.
pub async fn run_click_worker<C>(
    mut rx: mpsc::Receiver<ClickContext>,
    clicks: Arc<C>,
    geo: Arc<GeoLocator>,
    concurrency: usize,
) where
    C: ClickRepository + 'static,
{
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));

    while let Some(ctx) = rx.recv().await {
        let permit = match semaphore.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => break,
        };

        let clicks = clicks.clone();
        let geo = geo.clone();

        tokio::spawn(async move {
            let _permit = permit;
            let link_id = ctx.link_id;

            match process_click(ctx, clicks.as_ref(), geo.as_ref()).await {
                Ok(()) => debug!("Recorded click for link {}", link_id),
                Err(e) => warn!("Failed to record click for link {}: {}", link_id, e),
            }
        });
    }

    debug!("Click worker shutting down");
}

/// Enriches a single click capture and persists it.
pub async fn process_click<C>(
    ctx: ClickContext,
    clicks: &C,
    geo: &GeoLocator,
) -> Result<(), AppError>
where
    C: ClickRepository,
{
    let client = classify_user_agent(ctx.user_agent.as_deref());
    let referrer = classify_referrer(ctx.referrer.as_deref());
    let location = geo.lookup(ctx.ip.as_deref()).await;

    clicks
        .record(NewClick {
            link_id: ctx.link_id,
            referrer,
            ip: ctx.ip,
            country: location.country,
            city: location.city,
            device: client.device,
            browser: client.browser,
            os: client.os,
            user_agent: ctx.user_agent,
        })
        .await?;

    Ok(())
}
