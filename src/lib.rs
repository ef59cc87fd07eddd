//! create-kadena-app: scaffold Kadena starter projects from platform templates.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{CreateOutcome, create, create_at};
pub use app::config::{CreateDefaults, resolve_templates_root};
pub use domain::{
    AppError, ContractMode, CreationOptions, ErrorKind, KadenaConfig, Network, Platform,
    SigningMode,
};
pub use services::{CopyReport, PackageManager};
