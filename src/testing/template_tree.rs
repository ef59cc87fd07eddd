use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Minimal templates root mirroring the shipped layout.
pub struct TemplateTree {
    dir: TempDir,
}

const CONFIG_TEMPLATE: &str = "const chainId = \"{{chainId}}\";\n\
const networkId = \"{{networkId}}\";\n\
const node = \"{{node}}\";\n\
const contractName = \"{{contractName}}\";\n\
const gasStationName = \"{{gasStationName}}\";\n\
const kadenaConfig = { chainId, networkId, node, contractName, gasStationName };\n";

impl TemplateTree {
    pub fn new() -> Self {
        let tree = Self { dir: TempDir::new().unwrap() };
        tree.write("vanilla/index.html", "<html>vanilla</html>\n");
        tree.write("vanilla/main.js", "console.log(kadenaConfig);\n");
        tree.write("react/app/package.json", "{\n  \"name\": \"create-kadena-app-template\"\n}\n");
        tree.write("react/app/src/App.js", "// default entry\n");
        tree.write("react/app/src/index.js", "import App from './App';\n");
        tree.write("react/signing/wallet/App.js", "// wallet entry\n");
        tree.write("react/signing/chainweaver/App.js", "// chainweaver entry\n");
        tree.write("vue/app/package.json", "{\n  \"name\": \"kadena-vue-app\"\n}\n");
        tree.write("vue/app/src/main.js", "createApp(App).mount('#app');\n");
        tree.write("shared/kadena-config.js.tmpl", CONFIG_TEMPLATE);
        tree.write("shared/pact/memory-wall.pact", "(module memory-wall GOVERNANCE)\n");
        tree
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}
