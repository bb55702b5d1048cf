//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! `punk-cli` binary, plus the handlers that run each command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::client::DEFAULT_API_URL;
use crate::models::SearchFilters;
use crate::output::{OutputFormat, Sink};

pub mod handlers;

/// Punk brewery catalog command-line interface.
#[derive(Parser, Debug)]
#[command(name = "punk-cli", about = "Query the Punk brewery catalog", version)]
pub struct Cli {
    /// Base URL of the Punk API.
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Log at debug level (RUST_LOG takes precedence when set).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print data about Punk Brewery beers. Use the id flag to retrieve info for a given beer.
    Beers(BeersArgs),

    /// Search Punk Brewery beers.
    Search(SearchArgs),
}

/// Arguments for `beers`.
#[derive(Args, Debug)]
pub struct BeersArgs {
    /// ID of the beer.
    #[arg(short, long)]
    pub id: Option<u64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Name of the beer.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Hops contained in the beer.
    #[arg(long)]
    pub hops: Option<String>,

    /// Malts contained in the beer.
    #[arg(short, long)]
    pub malts: Option<String>,

    /// Yeast contained in the beer.
    #[arg(short, long)]
    pub yeast: Option<String>,

    /// Minimum IBU of the beer.
    #[arg(long)]
    pub min_ibu: Option<String>,

    /// Maximum IBU of the beer.
    #[arg(long)]
    pub max_ibu: Option<String>,

    /// Minimum ABV of the beer.
    #[arg(long)]
    pub min_abv: Option<String>,

    /// Maximum ABV of the beer.
    #[arg(long)]
    pub max_abv: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl SearchArgs {
    /// The filters the user supplied.
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            name: self.name.clone(),
            yeast: self.yeast.clone(),
            malt: self.malts.clone(),
            hops: self.hops.clone(),
            min_ibu: self.min_ibu.clone(),
            max_ibu: self.max_ibu.clone(),
            min_abv: self.min_abv.clone(),
            max_abv: self.max_abv.clone(),
        }
    }
}

/// Output options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Format to export data. Available formats: json csv.
    #[arg(short, long, default_value = "json")]
    pub format: String,

    /// Path to file for exporting data.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_flag(&self.format)
    }

    pub fn sink(&self) -> Sink {
        Sink::from_output(self.output.as_deref())
    }
}
