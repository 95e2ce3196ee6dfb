use std::sync::Arc;

use anyhow::Result;

use incentivist::backend::SnapshotBackend;
use incentivist::config::Config;
use incentivist::service::PolicyService;
use incentivist::{logger, policy, service, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    let policies = match &config.data.policies_file {
        Some(path) => service::load_snapshot(path)?,
        None => policy::demo_policies(),
    };

    let service = PolicyService::new(Arc::new(SnapshotBackend), policies);

    // Run the TUI application
    ui::run_app(service, &config).await?;

    Ok(())
}
