//! authpulse - bulk authorization round-trip checker.
//!
//! Authenticates a user against an OIDC identity provider, exchanges the
//! access token for a UMA authorization ticket, introspects it, and
//! resolves the projects the user may view. Repeats the whole flow N
//! times, logging duration and outcome per pass.

mod output;

use anyhow::{Context, Result};
use clap::Parser;

use authpulse_core::authz::{AuthzChecker, ClientDescriptor};
use authpulse_core::config::Config;
use authpulse_core::runner::BulkRunner;
use authpulse_core::telemetry;

use output::OutputFormat;

/// Measure OIDC/UMA authorization round-trips
#[derive(Parser)]
#[command(
    name = "authpulse",
    version,
    about = "Measure OIDC/UMA authorization round-trips",
    long_about = "Runs the full login -> authorize -> introspect flow repeatedly against \
                  the configured identity provider and reports per-pass timing and outcome."
)]
struct Cli {
    /// Number of end-to-end checks to run
    repeat: u32,

    /// Username to authenticate as
    username: String,

    /// Password for the user
    #[arg(env = "AUTHPULSE_PASSWORD", hide_env_values = true)]
    password: String,

    /// Configuration file path
    #[arg(short, long, env = "AUTHPULSE_CONFIG")]
    config: Option<String>,

    /// Authorization client descriptor (JSON) path
    #[arg(short, long, env = "AUTHPULSE_DESCRIPTOR")]
    descriptor: Option<String>,

    /// Output format for the final report
    #[arg(short, long, default_value = "table")]
    output: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli).await {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    telemetry::init_logging(&config.logging).context("failed to initialize logging")?;

    let descriptor_path = cli
        .descriptor
        .clone()
        .or_else(|| config.descriptor_path.clone())
        .context("no authorization client descriptor configured (pass --descriptor or set descriptor_path)")?;
    let descriptor = ClientDescriptor::from_file(&descriptor_path)?;

    let checker = AuthzChecker::new(config.identity.clone(), descriptor)?;
    let runner = BulkRunner::new(&checker, config.runner.slow_threshold);

    let report = runner.run(cli.repeat, &cli.username, &cli.password).await;
    output::print_report(&report, cli.output);

    // Per-iteration failures are already logged; the run itself completed.
    Ok(())
}
