//! CLI runner - executes commands

use crate::auth::AuthConfig;
use crate::catalog::{BikeService, FilterOptions};
use crate::cli::commands::{filters_from_pairs, parse_pairs, Cli, Commands};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::filter::{keys, FilterSet, QueryKey};
use crate::form::{render, FormKind};
use crate::http::HttpClient;
use crate::query::{BikeQuery, QueryOptions, QuerySnapshot};
use crate::types::{OutputFormat, StringMap};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Browse {
                filters,
                pages,
                single_page,
            } => {
                let options = if *single_page {
                    Some(QueryOptions::single_page())
                } else {
                    None
                };
                self.list(filters.to_filters(), *pages, options).await
            }
            Commands::Search {
                query,
                sort_by,
                pages,
            } => {
                let mut filters = FilterSet::new().with(keys::QUERY, query.as_str());
                if let Some(sort) = sort_by {
                    filters = filters.with(keys::SORT_BY, sort.as_str());
                }
                self.list(filters, *pages, None).await
            }
            Commands::Filters => self.filters().await,
            Commands::Key { filters } => self.key(filters),
            Commands::Form { name, values } => self.form(name, values),
        }
    }

    /// Resolve configuration: file, then environment, then flags
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        config.apply_env()?;

        if let Some(url) = &self.cli.base_url {
            config.base_url = Some(url.clone());
        }
        if let Some(token) = &self.cli.token {
            config.auth = AuthConfig::bearer(token.clone());
        }

        config.validate()?;
        Ok(config)
    }

    fn service(config: &ClientConfig) -> Result<BikeService> {
        let client = HttpClient::with_session(config.http_config(), config.session())?;
        Ok(BikeService::new(client).with_filter_options_ttl(config.filter_options_ttl()))
    }

    fn format(&self) -> OutputFormat {
        self.cli.format.into()
    }

    /// Run a browse or search query and print what was loaded
    async fn list(
        &self,
        filters: FilterSet,
        pages: usize,
        options: Option<QueryOptions>,
    ) -> Result<()> {
        let config = self.load_config()?;
        let service = Arc::new(Self::service(&config)?);
        let options = options.unwrap_or_else(|| config.query_options());

        let query = BikeQuery::new(service, filters, options);
        info!("Running query {}", query.key().await);

        let result = query.fetch_pages(pages.max(1)).await;
        let snapshot = query.snapshot().await;
        self.print_snapshot(&snapshot);
        result.map(|_| ())
    }

    async fn filters(&self) -> Result<()> {
        let config = self.load_config()?;
        let service = Self::service(&config)?;
        let options = service.filter_options().await?;
        match self.format() {
            OutputFormat::Json => self.output(&options),
            OutputFormat::Pretty => print_filter_options(&options),
        }
        Ok(())
    }

    fn key(&self, pairs: &[String]) -> Result<()> {
        let filters = filters_from_pairs(pairs)?;
        println!("{}", QueryKey::of(&filters));
        Ok(())
    }

    fn form(&self, name: &str, pairs: &[String]) -> Result<()> {
        let schema = name.parse::<FormKind>()?.schema();

        if !pairs.is_empty() {
            let values: StringMap = parse_pairs(pairs)?.into_iter().collect();
            let errors = schema.validate(&values);
            let valid = errors.is_empty();
            self.output(&json!({ "form": schema.id, "valid": valid, "errors": errors }));
            if !valid {
                return Err(Error::validation(
                    schema.id,
                    format!("{} field(s) failed validation", errors.len()),
                ));
            }
            return Ok(());
        }

        let fields = render(schema, &StringMap::new());
        match self.format() {
            OutputFormat::Json => self.output(&json!({ "form": schema.id, "fields": fields })),
            OutputFormat::Pretty => {
                println!("{}", schema.title);
                for field in &fields {
                    println!("  {}", field.to_html());
                }
            }
        }
        Ok(())
    }

    fn print_snapshot(&self, snapshot: &QuerySnapshot) {
        match self.format() {
            OutputFormat::Json => self.output(snapshot),
            OutputFormat::Pretty => {
                println!("{} ({} page(s), {:?})", snapshot.key, snapshot.pages, snapshot.state);
                for item in &snapshot.items {
                    let price = item
                        .price
                        .map_or_else(|| "-".to_string(), |p| format!("{p:.0}"));
                    let badges = if item.badges.is_empty() {
                        String::new()
                    } else {
                        format!(" [{}]", item.badges.join(", "))
                    };
                    println!(
                        "  {} | {} {} {} | {}{}",
                        item.id, item.brand, item.title, item.year, price, badges
                    );
                }
                if snapshot.has_more {
                    println!("  ... more available");
                }
                if let Some(failure) = &snapshot.error {
                    println!("  error: {}", failure.message);
                }
            }
        }
    }

    /// Output a value in the configured format
    fn output<T: Serialize>(&self, value: &T) {
        match self.format() {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(value).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
            }
        }
    }
}

fn print_filter_options(options: &FilterOptions) {
    println!("Brands: {}", options.brands.join(", "));
    println!("Years: {}", options.years.join(", "));
    if let Some(range) = &options.price_range {
        println!("Price: {:?} - {:?}", range.min, range.max);
    }
    let sorts: Vec<String> = options
        .sort_options
        .iter()
        .map(|s| format!("{} ({})", s.value(), s.label()))
        .collect();
    println!("Sort: {}", sorts.join(", "));
}
