//! CLI commands and argument parsing

use crate::filter::{keys, FilterSet, FilterValue};
use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Moto catalog query CLI
#[derive(Parser, Debug)]
#[command(name = "moto-catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides config and environment)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Bearer token (overrides config and environment)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: FormatArg,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog with structured filters
    Browse {
        #[command(flatten)]
        filters: BrowseArgs,

        /// Pages to load
        #[arg(long, default_value = "1")]
        pages: usize,

        /// Load only the first page
        #[arg(long)]
        single_page: bool,
    },

    /// Free-text search
    Search {
        /// Search text
        query: String,

        /// Sort order
        #[arg(long)]
        sort_by: Option<String>,

        /// Pages to load
        #[arg(long, default_value = "1")]
        pages: usize,
    },

    /// Show available filter options
    Filters,

    /// Print the query key for a filter set (no network access)
    Key {
        /// Filters as name=value pairs
        filters: Vec<String>,
    },

    /// Render a built-in form
    Form {
        /// Form name: vehicle or event
        name: String,

        /// Validate these name=value pairs against the form instead
        #[arg(long = "value")]
        values: Vec<String>,
    },
}

/// Structured browse filters
#[derive(clap::Args, Debug, Default, Clone)]
pub struct BrowseArgs {
    /// Brand (repeat for several)
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Registration year
    #[arg(long)]
    pub year: Option<String>,

    /// Price range, e.g. 100-500, 100- or -500
    #[arg(long)]
    pub price: Option<String>,

    /// Sort order
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Designer id
    #[arg(long)]
    pub designer_id: Option<String>,
}

impl BrowseArgs {
    /// Build the filter set these arguments describe
    pub fn to_filters(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        match self.brands.as_slice() {
            [] => {}
            [one] => filters = filters.with(keys::BRAND, one.as_str()),
            many => filters = filters.with(keys::BRANDS, many.to_vec()),
        }
        let optional = [
            (keys::YEAR, &self.year),
            (keys::PRICE, &self.price),
            (keys::SORT_BY, &self.sort_by),
            (keys::DESIGNER_ID, &self.designer_id),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                filters = filters.with(key, value.as_str());
            }
        }
        filters
    }
}

/// Parse `name=value` pairs. Comma-separated values become lists.
pub fn parse_pairs(pairs: &[String]) -> crate::Result<Vec<(String, String)>> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.to_string()))
                .filter(|(k, _)| !k.is_empty())
                .ok_or_else(|| crate::Error::config(format!("Expected name=value, got '{pair}'")))
        })
        .collect()
}

/// Build a filter set from `name=value` pairs
pub fn filters_from_pairs(pairs: &[String]) -> crate::Result<FilterSet> {
    Ok(parse_pairs(pairs)?
        .into_iter()
        .map(|(k, v)| {
            let value = if v.contains(',') {
                FilterValue::List(v.split(',').map(|s| s.trim().to_string()).collect())
            } else {
                FilterValue::Text(v)
            };
            (k, value)
        })
        .collect())
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Pretty => OutputFormat::Pretty,
        }
    }
}
