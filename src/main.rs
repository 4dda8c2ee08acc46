//! Sentence API command-line client
//!
//! Runs a single CRUD operation against the sentence API and prints the
//! response body as JSON.

use anyhow::{Context, Result, bail};
use sentence_client::core::logging::init_logging;
use sentence_client::{Config, SentenceApi, SentenceClient};
use serde::Serialize;
use tracing::{error, info};

/// Operation requested on the command line
#[derive(Debug, PartialEq, Eq)]
enum Command {
    List,
    Get(i64),
    Create(String),
    Update(i64, String),
    Delete(i64),
}

/// Parsed command-line arguments
#[derive(Debug, PartialEq, Eq)]
struct Args {
    config_path: Option<String>,
    command: Command,
}

fn parse_id(raw: Option<&String>) -> Result<i64> {
    let raw = raw.context("Missing sentence ID")?;
    raw.parse::<i64>()
        .with_context(|| format!("Invalid sentence ID: {}", raw))
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut config_path = None;
    let mut rest = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            config_path = Some(iter.next().context("--config requires a path")?.clone());
        } else {
            rest.push(arg);
        }
    }

    let command = match rest.first().map(|s| s.as_str()) {
        Some("list") => Command::List,
        Some("get") => Command::Get(parse_id(rest.get(1).copied())?),
        Some("create") => {
            let value = rest.get(1).context("Missing sentence value")?;
            Command::Create(value.to_string())
        }
        Some("update") => Command::Update(
            parse_id(rest.get(1).copied())?,
            rest.get(2).context("Missing sentence value")?.to_string(),
        ),
        Some("delete") => Command::Delete(parse_id(rest.get(1).copied())?),
        Some(other) => bail!("Unknown command: {}", other),
        None => bail!("No command given (try --help)"),
    };

    Ok(Args {
        config_path,
        command,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(client: &dyn SentenceApi, command: Command) -> Result<()> {
    match command {
        Command::List => print_json(&client.find_all().await?.data),
        Command::Get(id) => print_json(&client.find(id).await?.data),
        Command::Create(value) => print_json(&client.create(&value).await?.data),
        Command::Update(id, value) => print_json(&client.update(id, &value).await?.data),
        Command::Delete(id) => print_json(&client.destroy(id).await?.data),
    }
}

#[tokio::main]
async fn main() {
    let raw_args: Vec<String> = std::env::args().skip(1).collect();

    if raw_args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return;
    }

    let args = match parse_args(&raw_args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    };

    // Load configuration
    let config = match &args.config_path {
        Some(path) => Config::from_file(path),
        None => Config::from_env(),
    };
    let config = match config {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.log_level);

    info!(
        base_url = %config.base_url,
        environment = %config.environment,
        "Configuration loaded"
    );

    let client = match SentenceClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&client, args.command).await {
        error!("Request failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Print help message
fn print_help() {
    println!("Sentence API client v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: sentence-client [--config PATH] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  list                  List all sentences");
    println!("  get <ID>              Show one sentence");
    println!("  create <VALUE>        Create a sentence");
    println!("  update <ID> <VALUE>   Replace a sentence's value");
    println!("  delete <ID>           Delete a sentence");
    println!();
    println!("Options:");
    println!("  --config PATH   Load configuration from a TOML file");
    println!("  --help          Display this help message");
    println!();
    println!("Environment variables (used when --config is absent):");
    println!("  CONFIG_PATH      - TOML configuration file");
    println!("  BASE_URL         - Server root URL (required)");
    println!("  APP_ENV          - production disables basic auth (default: development)");
    println!("  BASIC_AUTH_USER  - Basic-auth username (default: user)");
    println!("  BASIC_AUTH_PASS  - Basic-auth password (default: pass)");
    println!("  REQUEST_TIMEOUT  - Request timeout in seconds (default: none)");
    println!("  LOG_LEVEL        - Logging level (default: info)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_args(&args(&["list"])).unwrap().command, Command::List);
        assert_eq!(parse_args(&args(&["get", "42"])).unwrap().command, Command::Get(42));
        assert_eq!(
            parse_args(&args(&["create", "hello world"])).unwrap().command,
            Command::Create("hello world".to_string())
        );
        assert_eq!(
            parse_args(&args(&["update", "7", "new"])).unwrap().command,
            Command::Update(7, "new".to_string())
        );
        assert_eq!(parse_args(&args(&["delete", "3"])).unwrap().command, Command::Delete(3));
    }

    #[test]
    fn test_parse_config_flag() {
        let parsed = parse_args(&args(&["--config", "client.toml", "list"])).unwrap();
        assert_eq!(parsed.config_path.as_deref(), Some("client.toml"));
        assert_eq!(parsed.command, Command::List);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["get"])).is_err());
        assert!(parse_args(&args(&["get", "abc"])).is_err());
        assert!(parse_args(&args(&["update", "1"])).is_err());
        assert!(parse_args(&args(&["rename", "1"])).is_err());
        assert!(parse_args(&args(&["list", "--config"])).is_err());
    }
}
