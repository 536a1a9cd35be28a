//! The factory configuration handed to the token API and the frontend.

use {
    alloy_primitives::Address,
    serde::{Deserialize, Serialize},
    std::{
        fs,
        io,
        path::{Path, PathBuf},
    },
};

/// File name consumers look for.
pub const FILE_NAME: &str = "configFactory.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoryConfiguration {
    pub trex_factory_contract_address: Address,
    pub gateway_contract_address: Address,
    pub claim_issuer_contract_address: Address,
    pub token_lock_smart_contract: Address,
    pub deployer: Address,
    pub ir_agent: Address,
    pub token_agent: Address,
    pub user: Address,
    pub claim_issuer: Address,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("factory configuration at {} is not valid JSON", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes `config` to `path`, replacing whatever was there before.
pub fn write(path: &Path, config: &FactoryConfiguration) -> Result<(), ConfigFileError> {
    try_write(path, config)
        .inspect_err(|err| tracing::error!(?err, "failed to write factory configuration"))?;
    tracing::info!(path = %path.display(), "wrote factory configuration");
    Ok(())
}

fn try_write(path: &Path, config: &FactoryConfiguration) -> Result<(), ConfigFileError> {
    let mut json = serde_json::to_vec_pretty(config).map_err(|source| ConfigFileError::Json {
        path: path.to_owned(),
        source,
    })?;
    json.push(b'\n');
    fs::write(path, json).map_err(|source| ConfigFileError::Io {
        path: path.to_owned(),
        source,
    })
}

pub fn read(path: &Path) -> Result<FactoryConfiguration, ConfigFileError> {
    let json = fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| ConfigFileError::Json {
        path: path.to_owned(),
        source,
    })
}
