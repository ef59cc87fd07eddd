pub mod error;
pub mod kadena_config;
pub mod layout;
pub mod options;
pub mod resolved;

pub use error::{AppError, ErrorKind};
pub use kadena_config::KadenaConfig;
pub use options::{
    ContractMode, CreationOptions, DEFAULT_CHAIN_ID, Network, Platform, SigningMode,
};
pub use resolved::ResolvedOptions;
