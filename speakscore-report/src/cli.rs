//! Command-line arguments

use clap::Parser;
use speakscore_common::config::Overrides;
use std::path::PathBuf;

/// Command-line arguments for speakscore-report
#[derive(Parser, Debug)]
#[command(name = "speakscore-report")]
#[command(about = "Language assessment score report server")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind to
    #[arg(long, env = "SPEAKSCORE_BIND")]
    pub bind: Option<String>,

    /// Assessment record JSON file
    #[arg(short, long, env = "SPEAKSCORE_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// TOML config file (defaults to the platform config directory)
    #[arg(short, long, env = "SPEAKSCORE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Values that take priority over the TOML file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            port: self.port,
            bind_address: self.bind.clone(),
            data_file: self.data_file.clone(),
        }
    }
}
