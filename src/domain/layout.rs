//! Fixed locations inside the templates root and the generated project.

use std::path::{Path, PathBuf};

use crate::domain::{Platform, SigningMode};

/// Directory holding assets shared by every platform.
pub const SHARED_DIR: &str = "shared";

/// Config template, relative to [`SHARED_DIR`].
pub const CONFIG_TEMPLATE_FILE: &str = "kadena-config.js.tmpl";

/// Generated config file name.
pub const CONFIG_FILE: &str = "kadena-config.js";

/// Appended to the config for platforms with a source subtree.
pub const CONFIG_EXPORT: &str = "export default kadenaConfig;\n";

/// Contract sources, relative to [`SHARED_DIR`] and to the project root.
pub const CONTRACT_DIR: &str = "pact";

/// Token in the React package manifest replaced by the project directory name.
pub const PACKAGE_NAME_PLACEHOLDER: &str = "create-kadena-app-template";

pub const PACKAGE_MANIFEST: &str = "package.json";

/// Entry point replaced by the selected signing variant.
pub const ENTRY_POINT: &str = "src/App.js";

pub fn config_template(templates_root: &Path) -> PathBuf {
    templates_root.join(SHARED_DIR).join(CONFIG_TEMPLATE_FILE)
}

pub fn contract_source(templates_root: &Path) -> PathBuf {
    templates_root.join(SHARED_DIR).join(CONTRACT_DIR)
}

/// Source of the entry-point variant for `mode`.
pub fn signing_variant(templates_root: &Path, platform: Platform, mode: SigningMode) -> PathBuf {
    templates_root.join(platform.dir_name()).join("signing").join(mode.dir_name()).join("App.js")
}

/// Where the generated config lands inside `target_dir`.
pub fn config_destination(target_dir: &Path, platform: Platform) -> PathBuf {
    if platform.has_source_subtree() {
        target_dir.join("src").join(CONFIG_FILE)
    } else {
        target_dir.join(CONFIG_FILE)
    }
}
