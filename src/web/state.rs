use crate::services::pinning::PinningClient;
use crate::Config;
use anyhow::Result;
use tera::Tera;

pub struct AppState {
    pub pinning: PinningClient,
    pub templates: Tera,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let pinning = PinningClient::new(&config.pinning)?;

        let mut templates = Tera::default();
        templates.add_raw_templates(vec![(
            "upload.html",
            include_str!("../../templates/upload.html"),
        )])?;

        Ok(Self { pinning, templates })
    }
}
