use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{export, serve};

#[derive(Parser)]
#[command(name = "forecast-dashboard")]
#[command(about = "Forecast dashboard web server and export tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    ///
    /// Options left out fall back to the configuration file and
    /// FORECAST_* environment variables.
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Directory holding forecast_<Metric>.csv files
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Directory with the built frontend bundle
        #[arg(short, long)]
        static_dir: Option<PathBuf>,
    },
    /// Write the CSV served by /export_csv to a file
    ///
    /// Examples:
    ///   forecast-dashboard export --metric Revenue
    ///   forecast-dashboard export --metric Sessions --output sessions.csv
    Export {
        /// Metric to export (Revenue, Sessions or Conversions)
        #[arg(short, long)]
        metric: String,

        /// Output path, defaults to forecast_<Metric>.csv
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory holding forecast_<Metric>.csv files
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, data_dir, static_dir } => {
                serve(bind_address, data_dir, static_dir).await?;
            }
            Commands::Export { metric, output, data_dir } => {
                export(&metric, output, data_dir).await?;
            }
        }
        Ok(())
    }
}
