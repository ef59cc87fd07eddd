//! Project creation pipeline.

use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, CreationOptions, KadenaConfig, Platform, ResolvedOptions};
use crate::ports::{Clock, CommandRunner, ToolLocator};
use crate::services::installer::{self, PackageManager};
use crate::services::materializer;
use crate::services::CopyReport;

/// Summary of a completed creation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    /// Project directory as given, relative to the working directory.
    pub project_dir: String,
    pub target_dir: PathBuf,
    pub platform: Platform,
    pub config: KadenaConfig,
    pub config_path: PathBuf,
    /// Template, signing variant and contract files combined.
    pub files: CopyReport,
    pub git_initialized: bool,
    pub package_manager: Option<PackageManager>,
    /// Manager detected on the host, whether or not install ran.
    pub available_manager: Option<PackageManager>,
}

/// Build the per-run context. Fails before anything is written if the template is missing.
pub fn resolve<R, T, C>(
    ctx: &AppContext<R, T, C>,
    options: CreationOptions,
) -> Result<ResolvedOptions, AppError>
where
    R: CommandRunner,
    T: ToolLocator,
    C: Clock,
{
    options.validate()?;
    let template_dir = ctx.locator().locate(options.platform)?;

    Ok(ResolvedOptions {
        templates_root: ctx.locator().root().to_path_buf(),
        template_dir,
        target_dir: ctx.cwd().join(&options.project_dir),
        has_npm: ctx.tools().is_available(PackageManager::Npm.program()),
        has_yarn: ctx.tools().is_available(PackageManager::Yarn.program()),
        options,
    })
}

/// Execute the create command.
///
/// Steps run strictly in order and the first failure aborts the rest. Nothing
/// already written to the target directory is rolled back.
pub fn execute<R, T, C>(
    ctx: &AppContext<R, T, C>,
    options: CreationOptions,
) -> Result<CreateOutcome, AppError>
where
    R: CommandRunner,
    T: ToolLocator,
    C: Clock,
{
    let resolved = resolve(ctx, options)?;
    let options = resolved.options();
    let config = KadenaConfig::generate(options, ctx.clock().now());
    info!(
        platform = %options.platform,
        target = %resolved.target_dir().display(),
        network = config.network_id.as_str(),
        contract = config.contract_name.as_str(),
        "creating project"
    );

    let mut files = materializer::materialize(&resolved)?;
    files += materializer::apply_signing_variant(&resolved)?;
    materializer::rewrite_package_manifest(&resolved)?;
    let config_path = materializer::write_config_file(&resolved, &config)?;
    files += materializer::copy_contract_files(&resolved)?;

    if options.git {
        installer::init_vcs(ctx.runner(), resolved.target_dir())?;
    }

    let package_manager = if options.install {
        installer::install_dependencies(ctx.runner(), &resolved)?
    } else {
        None
    };

    Ok(CreateOutcome {
        project_dir: options.project_dir.clone(),
        target_dir: resolved.target_dir().to_path_buf(),
        platform: options.platform,
        config,
        config_path,
        files,
        git_initialized: options.git,
        package_manager,
        available_manager: PackageManager::detect(resolved.has_npm, resolved.has_yarn),
    })
}
