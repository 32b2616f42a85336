use tracing::{info, warn};
use tv_subscriber::application::models::network::Network;
use tv_subscriber::application::models::reservation::SubscriptionTarget;
use tv_subscriber::{Config, TvSubscriber};

/// Logs in with `TVSUB_USERNAME`/`TVSUB_PASSWORD`, lists the Kanto channels
/// and prints the guide of the first one. Set `TVSUB_BOOK_FIRST=1` to book
/// the first programme.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::new();
    info!("Using {}", config.rest_api);
    let credentials = config
        .credentials
        .clone()
        .ok_or_else(|| anyhow::anyhow!("TVSUB_USERNAME and TVSUB_PASSWORD must be set"))?;

    let mut subscriber = TvSubscriber::from_config(&config)?;
    subscriber.login_with(&credentials).await?;
    info!("{} online: {}", subscriber, subscriber.is_online().await);

    let channels = subscriber.get_channels(Network::Kanto).await?;
    let Some(channel) = channels.iter().find(|c| c.epgtoken.is_some()) else {
        warn!("No channel with a programme guide");
        return Ok(());
    };

    let events = subscriber.get_epgs(channel).await?;
    for event in events.iter().take(10) {
        info!(
            "{} {} [{}] {}",
            event.starts_at(),
            event.service,
            event.price,
            event.event_name
        );
    }

    if std::env::var("TVSUB_BOOK_FIRST").as_deref() == Ok("1") {
        if let Some(event) = events.first() {
            let reservation = subscriber.subscribe(&SubscriptionTarget::from(event)).await?;
            info!("Booked: {}", reservation);
        }
    }

    Ok(())
}
