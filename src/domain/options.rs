use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

use serde::Deserialize;

use crate::domain::AppError;

/// Supported starter platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Platform {
    Vanilla,
    React,
    Vue,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Vanilla, Platform::React, Platform::Vue];

    pub fn dir_name(self) -> &'static str {
        match self {
            Platform::Vanilla => "vanilla",
            Platform::React => "react",
            Platform::Vue => "vue",
        }
    }

    /// Template tree location relative to the templates root.
    ///
    /// Vanilla ships its files at the top of its directory; every other
    /// platform nests them under `app/` so sibling assets stay out of the copy.
    pub fn template_subpath(self) -> String {
        match self {
            Platform::Vanilla => self.dir_name().to_string(),
            Platform::React | Platform::Vue => format!("{}/app", self.dir_name()),
        }
    }

    /// Whether the platform offers a choice of client-side signing.
    pub fn supports_signing(self) -> bool {
        match self {
            Platform::React => true,
            Platform::Vanilla | Platform::Vue => false,
        }
    }

    /// Whether the generated config belongs in `src/` with an export appended.
    pub fn has_source_subtree(self) -> bool {
        match self {
            Platform::React => true,
            Platform::Vanilla | Platform::Vue => false,
        }
    }

    /// Whether the template's `package.json` carries a placeholder package name.
    pub fn rewrites_package_name(self) -> bool {
        match self {
            Platform::React => true,
            Platform::Vanilla | Platform::Vue => false,
        }
    }

    /// Development server command suggested after creation.
    pub fn start_script(self) -> &'static str {
        match self {
            Platform::Vanilla | Platform::React => "start",
            Platform::Vue => "dev",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL.into_iter().find(|platform| platform.dir_name() == s).ok_or_else(|| {
            AppError::InvalidTemplate {
                platform: s.to_string(),
                reason: format!(
                    "unsupported platform, expected one of: {}",
                    Platform::ALL.map(Platform::dir_name).join(", ")
                ),
            }
        })
    }
}

impl TryFrom<String> for Platform {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Target network tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Every value other than `mainnet` selects the test tier.
    pub fn from_option(value: &str) -> Self {
        match value {
            "mainnet" => Network::Mainnet,
            _ => Network::Testnet,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl From<String> for Network {
    fn from(value: String) -> Self {
        Network::from_option(&value)
    }
}

/// Whether the project targets the shared contract or deploys its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ContractMode {
    Deployed,
    DeployOwn,
}

impl ContractMode {
    /// Every value other than `deployed` selects a self-deployed contract.
    pub fn from_option(value: &str) -> Self {
        match value {
            "deployed" => ContractMode::Deployed,
            _ => ContractMode::DeployOwn,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContractMode::Deployed => "deployed",
            ContractMode::DeployOwn => "deploy-own",
        }
    }
}

impl From<String> for ContractMode {
    fn from(value: String) -> Self {
        ContractMode::from_option(&value)
    }
}

/// Client-side signing flavour of the React entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SigningMode {
    Wallet,
    Chainweaver,
}

impl SigningMode {
    pub fn from_option(value: &str) -> Self {
        match value {
            "wallet" => SigningMode::Wallet,
            _ => SigningMode::Chainweaver,
        }
    }

    pub fn dir_name(self) -> &'static str {
        match self {
            SigningMode::Wallet => "wallet",
            SigningMode::Chainweaver => "chainweaver",
        }
    }
}

impl From<String> for SigningMode {
    fn from(value: String) -> Self {
        SigningMode::from_option(&value)
    }
}

pub const DEFAULT_CHAIN_ID: &str = "1";

/// Options collected by the front end. Immutable once handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationOptions {
    pub platform: Platform,
    pub project_dir: String,
    pub project_name: String,
    pub network: Network,
    pub contract: ContractMode,
    /// Only read for platforms where [`Platform::supports_signing`] holds.
    pub signing: SigningMode,
    pub chain: String,
    pub git: bool,
    pub install: bool,
}

impl CreationOptions {
    /// Options with defaults for everything except platform and directory.
    pub fn new(platform: Platform, project_dir: impl Into<String>) -> Self {
        let project_dir = project_dir.into();
        Self {
            platform,
            project_name: project_dir.clone(),
            project_dir,
            network: Network::Testnet,
            contract: ContractMode::Deployed,
            signing: SigningMode::Wallet,
            chain: DEFAULT_CHAIN_ID.to_string(),
            git: false,
            install: false,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.project_dir.trim().is_empty() {
            return Err(AppError::Validation("Project directory must not be empty".into()));
        }
        let escapes = Path::new(&self.project_dir).components().any(|component| {
            matches!(component, Component::ParentDir | Component::RootDir | Component::Prefix(_))
        });
        if escapes {
            return Err(AppError::Validation(format!(
                "Invalid project directory '{}': must stay inside the working directory",
                self.project_dir
            )));
        }
        if self.project_name.trim().is_empty() {
            return Err(AppError::Validation("Project name must not be empty".into()));
        }
        if self.chain.is_empty() || !self.chain.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::Validation(format!(
                "Invalid chain id '{}': must be a non-negative integer",
                self.chain
            )));
        }
        Ok(())
    }
}
