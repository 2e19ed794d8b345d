//! Config command handler

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Dotted key, e.g. `backend.base_url` or `session.discard_stale`
    pub key: Option<String>,

    /// New value for `key`; omit to print the current one
    #[arg(requires = "key")]
    pub value: Option<String>,

    /// Print the config file location
    #[arg(long, conflicts_with_all = ["reset", "keys"])]
    pub path: bool,

    /// Overwrite the config file with defaults
    #[arg(long, conflicts_with = "keys")]
    pub reset: bool,

    /// List every settable key
    #[arg(long)]
    pub keys: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        println!("{}", Config::config_path()?.display());
        return Ok(());
    }
    if args.reset {
        Config::default().save()?;
        eprintln!("Wrote default configuration to {}", Config::config_path()?.display());
        return Ok(());
    }
    if args.keys {
        Config::available_keys().iter().for_each(|k| println!("{}", k));
        return Ok(());
    }

    let mut config = Config::load()?;

    let Some(key) = args.key else {
        print_sections(&config);
        return Ok(());
    };

    match args.value {
        Some(value) => {
            config.set(&key, &value)?;
            config.save()?;
            println!("{} = {}", key, config.get(&key).unwrap_or(value));
        }
        None => {
            let value = config.get(&key).ok_or_else(|| {
                Error::Config(format!(
                    "Unknown config key: {} (see `tama-map config --keys`)",
                    key
                ))
            })?;
            println!("{}", value);
        }
    }

    Ok(())
}

/// Print every key grouped under its TOML section header
fn print_sections(config: &Config) {
    let mut current = None;
    for key in Config::available_keys() {
        let Some((section, name)) = key.split_once('.') else {
            continue;
        };
        if current != Some(section) {
            if current.is_some() {
                println!();
            }
            println!("[{}]", section);
            current = Some(section);
        }
        println!("{} = {}", name, config.get(key).unwrap_or_default());
    }

    let mut providers: Vec<_> = config.url.providers.iter().collect();
    providers.sort();
    println!("\n[url.providers]");
    for (name, template) in providers {
        println!("{} = {:?}", name, template);
    }
}
