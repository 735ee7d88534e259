use clap::Parser;
use lightsched_tui::config::{DEBUG_VAR, DISCOVERY_URL_VAR, POLL_INTERVAL_VAR};
use lightsched_tui::Query;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lightsched", version, about = "Load-shedding schedule viewer")]
pub struct CliArgs {
    /// Run one query, print it and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the discovery base URL
    #[arg(long = "discovery-url", value_name = "URL")]
    pub discovery_url: Option<String>,

    /// Override the stage poll interval
    #[arg(long = "poll-interval-ms", value_name = "MS")]
    pub poll_interval_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Province for a headless query
    #[arg(long)]
    pub province: Option<String>,

    /// Municipality for a headless query
    #[arg(long)]
    pub municipality: Option<String>,

    /// Place for a headless query
    #[arg(long)]
    pub place: Option<String>,

    /// Initial route for the terminal client
    #[arg(long, value_name = "PATH", default_value = "/")]
    pub route: String,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.discovery_url {
            std::env::set_var(DISCOVERY_URL_VAR, url);
        }
        if let Some(ms) = self.poll_interval_ms {
            std::env::set_var(POLL_INTERVAL_VAR, ms.to_string());
        }
        if self.debug {
            std::env::set_var(DEBUG_VAR, "1");
        }
    }

    pub fn query(&self) -> Query {
        Query {
            province: self.province.clone(),
            municipality: self.municipality.clone(),
            place: self.place.clone(),
        }
    }
}
