//! Writes the project tree: template copy, platform fix-ups, generated config, contracts.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::ops::AddAssign;
use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::domain::layout;
use crate::domain::{AppError, ContractMode, KadenaConfig, ResolvedOptions};

/// Files written and files left alone by a non-clobbering copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: usize,
    pub skipped: usize,
}

impl AddAssign for CopyReport {
    fn add_assign(&mut self, other: Self) {
        self.copied += other.copied;
        self.skipped += other.skipped;
    }
}

/// Copy every file under `src` into `dst`, never replacing an existing destination file.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<CopyReport, AppError> {
    let mut report = CopyReport::default();

    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            AppError::io("Failed to walk", path, e.into())
        })?;
        let destination = dst.join(relative_to(entry.path(), src)?);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination)
                .map_err(|e| AppError::io("Failed to create directory", &destination, e))?;
            continue;
        }

        report += copy_file(entry.path(), &destination)?;
    }

    Ok(report)
}

fn relative_to<'a>(path: &'a Path, base: &Path) -> Result<&'a Path, AppError> {
    path.strip_prefix(base)
        .map_err(|e| AppError::io("Failed to resolve", path, io::Error::other(e)))
}

/// Copy one file unless something, including a dangling symlink, already sits at `dst`.
pub fn copy_file(src: &Path, dst: &Path) -> Result<CopyReport, AppError> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::io("Failed to create directory", parent, e))?;
    }
    let mut target = match OpenOptions::new().write(true).create_new(true).open(dst) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!(path = %dst.display(), "exists, skipping");
            return Ok(CopyReport { copied: 0, skipped: 1 });
        }
        Err(e) => return Err(AppError::io("Failed to create", dst, e)),
    };
    let mut source = File::open(src).map_err(|e| AppError::io("Failed to read", src, e))?;
    io::copy(&mut source, &mut target).map_err(|e| AppError::io("Failed to copy", src, e))?;
    if let Ok(metadata) = source.metadata() {
        target
            .set_permissions(metadata.permissions())
            .map_err(|e| AppError::io("Failed to set permissions", dst, e))?;
    }
    Ok(CopyReport { copied: 1, skipped: 0 })
}

/// Copy the platform template into the target directory.
pub fn materialize(resolved: &ResolvedOptions) -> Result<CopyReport, AppError> {
    info!(
        from = %resolved.template_dir().display(),
        to = %resolved.target_dir().display(),
        "copying template"
    );
    fs::create_dir_all(resolved.target_dir())
        .map_err(|e| AppError::io("Failed to create directory", resolved.target_dir(), e))?;
    copy_tree(resolved.template_dir(), resolved.target_dir())
}

/// Put the entry point matching the chosen signing mode in place.
///
/// No-op for platforms without signing modes.
pub fn apply_signing_variant(resolved: &ResolvedOptions) -> Result<CopyReport, AppError> {
    let options = resolved.options();
    if !options.platform.supports_signing() {
        return Ok(CopyReport::default());
    }

    let variant =
        layout::signing_variant(resolved.templates_root(), options.platform, options.signing);
    let entry_point = resolved.target_dir().join(layout::ENTRY_POINT);
    info!(signing = options.signing.dir_name(), "selecting entry point");

    // The template's own App.js was copied a moment ago; only a file the user
    // already had before this run is protected.
    if is_template_copy(resolved, &entry_point)? {
        fs::remove_file(&entry_point)
            .map_err(|e| AppError::io("Failed to remove", &entry_point, e))?;
    }
    copy_file(&variant, &entry_point)
}

fn is_regular_file(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|metadata| metadata.file_type().is_file())
}

fn is_template_copy(resolved: &ResolvedOptions, entry_point: &Path) -> Result<bool, AppError> {
    let default_entry = resolved.template_dir().join(layout::ENTRY_POINT);
    if !is_regular_file(entry_point) || !default_entry.exists() {
        return Ok(false);
    }
    let current =
        fs::read(entry_point).map_err(|e| AppError::io("Failed to read", entry_point, e))?;
    let default =
        fs::read(&default_entry).map_err(|e| AppError::io("Failed to read", &default_entry, e))?;
    Ok(current == default)
}

/// Name the package after the project directory.
pub fn rewrite_package_manifest(resolved: &ResolvedOptions) -> Result<(), AppError> {
    let options = resolved.options();
    if !options.platform.rewrites_package_name() {
        return Ok(());
    }

    let manifest = resolved.target_dir().join(layout::PACKAGE_MANIFEST);
    if !is_regular_file(&manifest) {
        debug!(path = %manifest.display(), "not a regular file, leaving package name");
        return Ok(());
    }
    let content =
        fs::read_to_string(&manifest).map_err(|e| AppError::io("Failed to read", &manifest, e))?;
    let rewritten = content.replace(layout::PACKAGE_NAME_PLACEHOLDER, &resolved.package_name());
    fs::write(&manifest, rewritten).map_err(|e| AppError::io("Failed to write", &manifest, e))?;
    Ok(())
}

/// Render the shared config template into the project. Returns the written path.
pub fn write_config_file(
    resolved: &ResolvedOptions,
    config: &KadenaConfig,
) -> Result<std::path::PathBuf, AppError> {
    let options = resolved.options();
    let template_path = layout::config_template(resolved.templates_root());
    let template = fs::read_to_string(&template_path)
        .map_err(|e| AppError::io("Failed to read", &template_path, e))?;

    let mut content = config.render(&template, &options.chain);
    if options.platform.has_source_subtree() {
        if !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(layout::CONFIG_EXPORT);
    }

    let destination = layout::config_destination(resolved.target_dir(), options.platform);
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::io("Failed to create directory", parent, e))?;
    }
    info!(path = %destination.display(), "writing config");
    fs::write(&destination, content).map_err(|e| AppError::io("Failed to write", &destination, e))?;
    Ok(destination)
}

/// Copy the contract sources for projects that deploy their own contract.
pub fn copy_contract_files(resolved: &ResolvedOptions) -> Result<CopyReport, AppError> {
    if resolved.options().contract != ContractMode::DeployOwn {
        return Ok(CopyReport::default());
    }
    let source = layout::contract_source(resolved.templates_root());
    let destination = resolved.target_dir().join(layout::CONTRACT_DIR);
    info!(to = %destination.display(), "copying contract files");
    copy_tree(&source, &destination)
}
