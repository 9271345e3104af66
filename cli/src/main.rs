mod commands;
mod config;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use raven_core::RavenError;
use tracing_subscriber::EnvFilter;

use commands::{Command, Outcome};
use config::Config;

#[derive(Debug, Parser)]
#[command(name = "raven", author, version, about = "Raven Tools SEO API from your terminal")]
struct Cli {
    /// API key; falls back to the config file
    #[arg(long, global = true, env = "RAVEN_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the API endpoint
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Connect timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    connect_timeout: Option<u64>,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    insecure: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let mut config = Config::load();

    if let Command::SetKey { key } = &cli.command {
        config.api_key = Some(key.clone());
        let path = config.save().context("failed to save config")?;
        println!("API key saved to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(api_key) = config.resolve_api_key(cli.api_key) else {
        bail!("no API key: pass --api-key, set RAVEN_API_KEY, or run `raven set-key <KEY>`");
    };

    let mut builder = config.client_builder(api_key);
    if let Some(url) = cli.base_url {
        builder = builder.base_url(url);
    }
    if let Some(secs) = cli.connect_timeout {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }
    if cli.insecure {
        builder = builder.accept_invalid_certs(true);
    }
    let client = builder.build()?;

    match commands::execute(&client, cli.command).await {
        Ok(Outcome::Data(data)) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok(Outcome::Write(true)) => {
            println!("success");
            Ok(ExitCode::SUCCESS)
        }
        Ok(Outcome::Write(false)) => {
            println!("rejected");
            Ok(ExitCode::from(2))
        }
        Err(e @ RavenError::Status { .. }) => {
            let status = client.last_error().unwrap_or_default();
            tracing::debug!(error = %e, "request failed");
            eprintln!("Raven API answered HTTP {}", status);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use raven_core::models::SearchEngine;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_rank() {
        let cli = Cli::try_parse_from([
            "raven", "rank", "example.com", "rust", "--start", "2012-07-01", "--end",
            "2012-07-31", "--engine", "bing",
        ])
        .unwrap();
        match cli.command {
            Command::Rank { engine, start, .. } => {
                assert_eq!(engine, SearchEngine::Msn);
                assert_eq!(start.to_string(), "2012-07-01");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn add_domain_accepts_comma_list() {
        let cli = Cli::try_parse_from([
            "raven", "add-domain", "example.com", "--engine", "1,2", "--engine", "3",
        ])
        .unwrap();
        match cli.command {
            Command::AddDomain { engine_ids, .. } => assert_eq!(engine_ids, ["1", "2", "3"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn link_input_is_required() {
        assert!(Cli::try_parse_from(["raven", "add-links"]).is_err());
        assert!(
            Cli::try_parse_from(["raven", "add-links", "--json", "[]", "--file", "x.json"]).is_err()
        );
    }
}
