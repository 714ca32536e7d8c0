//! codecompose - configuration bootstrap for the application runtime.
//!
//! Responsibilities:
//! - Load `.env`, read the environment, and assemble the runtime `Settings`,
//!   invoking the secrets-manager resolver when credentials are absent from
//!   the environment.
//! - Expose `check` and `show` subcommands with structured exit codes.
//!
//! Does NOT handle:
//! - Serving requests or opening database connections; the assembled
//!   settings are handed to the external runtime.
//!
//! Invariants:
//! - Assembly is run-once: any missing variable or failed secret lookup
//!   aborts before the runtime would serve traffic.
//! - The printed settings never contain the database password.

mod args;
mod error;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use args::{Cli, Commands, OutputFormat};
use codecompose_config::constants::RUNTIME_LOGGER_NAME;
use codecompose_config::{Settings, SettingsLoader};
use codecompose_secrets::SecretsManagerClient;
use error::{ExitCode, ExitCodeExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr so `show --format json` stays pipeable.
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run(&cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("error: {e:#}");
            e.exit_code()
        }
    };
    std::process::exit(code.as_i32());
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let loader = load_environment(cli)?;
    let settings = assemble(loader).await?;

    match cli.command {
        Commands::Check => {
            tracing::info!(
                database = %settings.database.name,
                host = %settings.database.host,
                "configuration assembled"
            );
            println!("configuration ok");
        }
        Commands::Show { format } => match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&settings)?),
            OutputFormat::Summary => print_summary(&settings),
        },
    }
    Ok(())
}

/// Load `.env` before touching the environment and hand back the loader.
/// `--env-file` points dotenv at an explicit file; otherwise the default
/// lookup (gated by `DOTENV_DISABLED`) applies.
fn load_environment(cli: &Cli) -> anyhow::Result<SettingsLoader> {
    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to load env file {}", path.display()))?;
            Ok(SettingsLoader::new())
        }
        None => Ok(SettingsLoader::new().load_dotenv()?),
    }
}

/// Assemble the settings: environment first, then at most one secret fetch
/// for whichever credential the environment did not supply.
async fn assemble(loader: SettingsLoader) -> anyhow::Result<Settings> {
    let loader = loader.from_env()?;

    let reference = loader
        .secret_reference()
        .context("secret reference unavailable after environment load")?;
    let resolver = SecretsManagerClient::builder()
        .region(reference.region)
        .secret_id(reference.arn)
        .build()?;

    let settings = loader.resolve_credentials(&resolver).await?.build()?;
    Ok(settings)
}

fn print_summary(settings: &Settings) {
    println!(
        "database: {}://{}@{}:{}/{}",
        settings.database.engine,
        settings.database.username,
        settings.database.host,
        settings.database.port,
        settings.database.name
    );
    println!(
        "regions: primary={} secondary={}",
        settings.regions.primary, settings.regions.secondary
    );
    println!("middleware stages: {}", settings.middleware.len());
    println!("installed apps: {}", settings.installed_apps.len());
    if let Some(level) = settings.logging.level_of(RUNTIME_LOGGER_NAME) {
        println!("runtime log level: {level}");
    }
    println!("static url: {}", settings.static_url);
}
