//! Generated Kadena configuration values.

use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};

use crate::domain::{ContractMode, CreationOptions, Network};

pub const CONTRACT_BASE_NAME: &str = "memory-wall";
pub const GAS_STATION_BASE_NAME: &str = "memory-wall-gas-station";

/// Values substituted into the shared config template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KadenaConfig {
    pub network_id: String,
    pub node: String,
    pub contract_name: String,
    pub gas_station_name: String,
}

impl KadenaConfig {
    /// Derive the config for `options`, reading the clock only for self-deployed contracts.
    pub fn generate(options: &CreationOptions, now: DateTime<Utc>) -> Self {
        let (network_id, node) = network_preset(options.network);

        let (contract_name, gas_station_name) = match options.contract {
            ContractMode::Deployed => {
                (CONTRACT_BASE_NAME.to_string(), GAS_STATION_BASE_NAME.to_string())
            }
            ContractMode::DeployOwn => {
                let hash = generation_hash(now, &options.project_name);
                (
                    format!("{}-{}", CONTRACT_BASE_NAME, hash),
                    format!("{}-{}", GAS_STATION_BASE_NAME, hash),
                )
            }
        };

        Self {
            network_id: network_id.to_string(),
            node: node.to_string(),
            contract_name,
            gas_station_name,
        }
    }

    /// Replace every placeholder token in `template`.
    pub fn render(&self, template: &str, chain_id: &str) -> String {
        [
            ("{{chainId}}", chain_id),
            ("{{networkId}}", self.network_id.as_str()),
            ("{{node}}", self.node.as_str()),
            ("{{contractName}}", self.contract_name.as_str()),
            ("{{gasStationName}}", self.gas_station_name.as_str()),
        ]
        .into_iter()
        .fold(template.to_string(), |text, (token, value)| text.replace(token, value))
    }
}

fn network_preset(network: Network) -> (&'static str, &'static str) {
    match network {
        Network::Mainnet => ("mainnet01", "us-e1"),
        Network::Testnet => ("testnet04", "us1.testnet"),
    }
}

/// Hex SHA-256 of the ISO-8601 timestamp (millisecond precision) followed by the project name.
pub fn generation_hash(now: DateTime<Utc>, project_name: &str) -> String {
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let mut hasher = Sha256::new();
    hasher.update(timestamp.as_bytes());
    hasher.update(project_name.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
