//! Placement Portal dashboard runner
//!
//! Loads every dashboard view once and prints the rendered fragments.

use anyhow::Context;
use tracing::info;

use placement_portal::{config::Settings, utils::logging, Dashboard};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("loading settings")?;
    settings.validate().context("validating settings")?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", placement_portal::info());
    let mut dashboard = Dashboard::new(&settings).context("building dashboard client")?;
    info!(base_url = %dashboard.client().base_url(), role = ?dashboard.role(), "Connecting to portal");
    dashboard.initialize().await;

    for (container, fragment) in dashboard.page().iter() {
        println!("<!-- {} -->", container);
        println!("{}", fragment);
    }

    if let Some(ticker) = dashboard.carousel() {
        info!(transform = %ticker.current().transform, "Announcements carousel running");
    }

    info!(students = dashboard.students().len(), "Dashboard loaded");
    dashboard.stop_carousel();
    Ok(())
}
