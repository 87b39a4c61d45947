use crate::{web, Config};
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = Config::load(config_path)?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    tracing::info!("Starting upload relay at http://{}", config.bind_addr());

    web::serve(&config).await?;

    Ok(())
}
