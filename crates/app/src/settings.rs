use clap::{Parser, Subcommand};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/borsello.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub email: String,
    /// Read from the config file or `BORSELLO_PASSWORD` only, never from a
    /// CLI flag.
    pub password: String,
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            email: String::new(),
            password: String::new(),
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "borsello", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:3000).
    #[arg(long)]
    base_url: Option<String>,
    /// Override login email.
    #[arg(long)]
    email: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Totals, net balance and the per-record series for both kinds.
    Summary,
    /// Record a new entry.
    Add {
        /// `income` or `expense`.
        #[arg(long)]
        kind: String,
        /// Decimal amount, e.g. 12.50.
        #[arg(long)]
        amount: String,
        /// Expense category or income source.
        #[arg(long)]
        label: String,
        #[arg(long)]
        icon: Option<String>,
    },
    /// Delete an entry by its id.
    Delete {
        #[arg(long)]
        kind: String,
        #[arg(long)]
        id: String,
    },
    /// Download the spreadsheet export for a kind.
    Export {
        #[arg(long)]
        kind: String,
        /// Output path; defaults to the service's suggested filename.
        #[arg(long)]
        out: Option<String>,
    },
}

pub fn load() -> Result<(Settings, Command), config::ConfigError> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("BORSELLO"));
    let mut settings: Settings = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(email) = args.email {
        settings.email = email;
    }

    Ok((settings, args.command))
}
