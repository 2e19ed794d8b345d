//! Streets command handler
//!
//! Loads the street directory the way the page does on start-up.

use crate::api::http::HttpBackend;
use crate::config::Config;
use crate::error::Result;
use crate::page::Page;
use clap::Args;

/// Streets command arguments
#[derive(Args)]
pub struct StreetsArgs {
    /// Backend base URL (overrides backend.base_url)
    #[arg(long)]
    pub backend: Option<String>,

    /// Only show streets containing this text
    #[arg(long)]
    pub filter: Option<String>,
}

/// Run the streets command
pub async fn run(args: StreetsArgs) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(url) = args.backend {
        config.backend.base_url = url;
    }

    let backend = HttpBackend::from_config(&config.backend)?;
    let mut page = Page::from_config(&config);
    page.load_streets(&backend).await;

    if page.dev_panel.is_visible() {
        eprintln!("{}", page.dev_panel.content());
        std::process::exit(1);
    }

    let streets = page.street_select.filter(args.filter.as_deref().unwrap_or(""));
    for street in &streets {
        println!("{}", street);
    }
    eprintln!("{} streets", streets.len());

    Ok(())
}
