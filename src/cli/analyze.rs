//! Analyze command handler
//!
//! Runs one form submission through a [`Page`] and prints the rendered map.

use crate::api::http::HttpBackend;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter, Report};
use crate::model::SearchQuery;
use crate::page::{Page, SubmitOutcome};
use clap::Args;
use tracing::warn;

/// Analyze command arguments
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Street name, as listed by `tama-map streets`
    #[arg(long, short = 's', required_unless_present = "list_formats")]
    pub street: Option<String>,

    /// House number
    #[arg(long, short = 'n', required_unless_present = "list_formats")]
    pub house_number: Option<String>,

    /// Search radius in meters
    #[arg(long, short = 'r')]
    pub radius: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Backend base URL (overrides backend.base_url)
    #[arg(long)]
    pub backend: Option<String>,

    /// Print the dev panel content to stderr
    #[arg(long)]
    pub dev: bool,

    /// Skip checking the street against the street list
    #[arg(long)]
    pub no_validate: bool,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the analyze command
pub async fn run(args: AnalyzeArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let mut config = Config::load()?;
    if let Some(url) = args.backend {
        config.backend.base_url = url;
    }

    let format = args.format.unwrap_or_else(|| config.defaults.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;

    let query = SearchQuery::new(
        args.street.unwrap_or_default(),
        args.house_number.unwrap_or_default(),
        args.radius
            .unwrap_or_else(|| config.defaults.radius.to_string()),
    );

    let backend = HttpBackend::from_config(&config.backend)?;
    let mut page = Page::from_config(&config);

    if !args.no_validate {
        page.load_streets(&backend).await;
        if page.street_select.streets().next().is_none() {
            warn!("Street list unavailable, submitting without validation");
        } else if !page.street_select.contains(&query.street) {
            return Err(Error::UnknownStreet(query.street));
        }
    }

    let outcome = page.submit(&backend, &query).await;

    if args.dev {
        eprintln!("[{}]", page.dev_panel.toggle_label());
        eprintln!("{}", page.dev_panel.content());
    }
    for notice in &page.notices {
        eprintln!("{}", notice);
    }

    let failed = matches!(outcome, SubmitOutcome::Failed(_));
    let report = Report::new(query, outcome, page);
    let output = formatter.format(&report, &config)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    if failed {
        std::process::exit(1);
    }

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:8} - {}", format.name, format.description);
    }
}
