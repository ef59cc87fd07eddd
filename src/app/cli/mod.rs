//! CLI Adapter.

mod prompts;

use std::io::IsTerminal;
use std::path::{Component, Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, CreateOutcome};
use crate::app::config::{CreateDefaults, resolve_templates_root};
use crate::domain::{
    AppError, ContractMode, CreationOptions, DEFAULT_CHAIN_ID, Network, Platform, SigningMode,
};

#[derive(Parser)]
#[command(name = "create-kadena-app")]
#[command(version)]
#[command(about = "Scaffold a Kadena starter project from a platform template", long_about = None)]
struct Cli {
    /// Directory to create the project in (relative to the current directory)
    project_dir: Option<String>,
    /// Platform: vanilla, react, or vue
    #[arg(short, long)]
    platform: Option<String>,
    /// Project name (defaults to the project directory)
    #[arg(short, long)]
    name: Option<String>,
    /// Network tier: mainnet or testnet
    #[arg(long)]
    network: Option<String>,
    /// Contract: deployed (shared memory-wall) or deploy-own
    #[arg(long)]
    contract: Option<String>,
    /// Client-side signing for react: wallet or chainweaver
    #[arg(long)]
    signing: Option<String>,
    /// Chain id written into the generated config
    #[arg(long)]
    chain: Option<String>,
    /// Initialize a git repository in the new project
    #[arg(long)]
    git: bool,
    /// Install dependencies with yarn or npm when available
    #[arg(long)]
    install: bool,
    /// Directory containing the platform templates
    #[arg(long, value_name = "PATH")]
    templates_dir: Option<PathBuf>,
    /// Defaults file (TOML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run_create(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_create(cli: Cli) -> Result<(), AppError> {
    let cwd = std::env::current_dir()?;
    let defaults = CreateDefaults::load(cli.config.as_deref(), &cwd)?;
    let templates_root = resolve_templates_root(cli.templates_dir.as_deref(), &defaults);

    let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    let Some(options) = resolve_options(&cli, &defaults, interactive)? else {
        return Ok(());
    };

    let outcome = api::create_at(options, templates_root, cwd)?;
    print_summary(&outcome);
    Ok(())
}

/// Merge flags, defaults file, and prompts. `None` when the user cancels a prompt.
///
/// The project name is only prompted for on an interactive terminal; otherwise
/// it falls back to the project directory.
fn resolve_options(
    cli: &Cli,
    defaults: &CreateDefaults,
    interactive: bool,
) -> Result<Option<CreationOptions>, AppError> {
    let platform = match (&cli.platform, defaults.platform) {
        (Some(value), _) => value.parse::<Platform>()?,
        (None, Some(platform)) => platform,
        (None, None) => match prompts::prompt_platform()? {
            Some(platform) => platform,
            None => return Ok(None),
        },
    };

    let project_dir = match &cli.project_dir {
        Some(value) => value.clone(),
        None => match prompts::prompt_project_dir()? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let project_name = match &cli.name {
        Some(name) => name.clone(),
        None if interactive => match prompts::prompt_project_name(&project_dir)? {
            Some(name) => name,
            None => return Ok(None),
        },
        None => project_dir.clone(),
    };

    let mut options = CreationOptions::new(platform, project_dir);
    options.project_name = project_name;
    options.network = cli
        .network
        .as_deref()
        .map(Network::from_option)
        .or(defaults.network)
        .unwrap_or(options.network);
    options.contract = cli
        .contract
        .as_deref()
        .map(ContractMode::from_option)
        .or(defaults.contract)
        .unwrap_or(options.contract);
    options.signing = cli
        .signing
        .as_deref()
        .map(SigningMode::from_option)
        .or(defaults.signing)
        .unwrap_or(options.signing);
    options.chain = cli
        .chain
        .clone()
        .or_else(|| defaults.chain.clone())
        .unwrap_or_else(|| DEFAULT_CHAIN_ID.to_string());
    options.git = cli.git || defaults.git.unwrap_or(false);
    options.install = cli.install || defaults.install.unwrap_or(false);

    Ok(Some(options))
}

fn print_summary(outcome: &CreateOutcome) {
    println!("✅ Created {} project at {}", outcome.platform, outcome.target_dir.display());
    println!("  Network: {} ({})", outcome.config.network_id, outcome.config.node);
    println!("  Contract: {}", outcome.config.contract_name);
    println!("  Gas station: {}", outcome.config.gas_station_name);
    println!("  Config: {}", outcome.config_path.display());
    if outcome.files.skipped > 0 {
        println!("  Kept {} existing file(s)", outcome.files.skipped);
    }
    if outcome.git_initialized {
        println!("  Initialized git repository");
    }
    if let Some(manager) = outcome.package_manager {
        println!("  Installed dependencies with {}", manager.program());
    }

    println!();
    println!("Next steps:");
    if !is_current_dir(&outcome.project_dir) {
        println!("  cd {}", outcome.project_dir);
    }
    match (outcome.package_manager, outcome.available_manager) {
        (Some(manager), _) => println!("  {}", manager.run_hint(outcome.platform.start_script())),
        (None, Some(manager)) => {
            println!("  {} install", manager.program());
            println!("  {}", manager.run_hint(outcome.platform.start_script()));
        }
        (None, None) => println!("  Install npm or yarn, then install dependencies"),
    }
}

fn is_current_dir(dir: &str) -> bool {
    Path::new(dir).components().all(|component| component == Component::CurDir)
}
