use alloy::primitives::Address;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "metronome.toml";
const CONFIG_DIR_NAME: &str = "metronome-status";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct StatusConfig {
    pub rpc_url: Option<String>,
    #[serde(default)]
    pub contracts: ContractsConfig,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ContractsConfig {
    pub auctions: Option<String>,
    pub converter: Option<String>,
}

/// Values passed on the command line; they take precedence over the file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub rpc_url: Option<String>,
    pub auctions: Option<String>,
    pub converter: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub rpc_url: String,
    pub auctions: Address,
    pub converter: Address,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse toml at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("missing rpc url: pass --rpc-url, set METRONOME_RPC_URL or add rpc_url to the config")]
    MissingRpcUrl,
    #[error("missing {name} address: pass --{name} or add it under [contracts]")]
    MissingAddress { name: &'static str },
    #[error("invalid {name} address {value:?}: {reason}")]
    InvalidAddress {
        name: &'static str,
        value: String,
        reason: String,
    },
}

pub fn load_config(path: impl AsRef<Path>) -> Result<StatusConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: StatusConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(config)
}

/// Loads `explicit` if given, otherwise the first existing default location.
/// With no file anywhere, an empty config is returned.
pub fn find_config(explicit: Option<&Path>) -> Result<StatusConfig, ConfigError> {
    match explicit {
        Some(path) => load_config(path),
        None => load_first(&default_paths()),
    }
}

fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    paths
}

fn load_first(paths: &[PathBuf]) -> Result<StatusConfig, ConfigError> {
    match paths.iter().find(|path| path.is_file()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_config(path)
        }
        None => Ok(StatusConfig::default()),
    }
}

pub fn resolve_endpoint(config: StatusConfig, overrides: Overrides) -> Result<Endpoint, ConfigError> {
    let rpc_url = overrides
        .rpc_url
        .or(config.rpc_url)
        .ok_or(ConfigError::MissingRpcUrl)?;
    let auctions = parse_address(
        "auctions",
        overrides.auctions.or(config.contracts.auctions),
    )?;
    let converter = parse_address(
        "converter",
        overrides.converter.or(config.contracts.converter),
    )?;

    Ok(Endpoint {
        rpc_url,
        auctions,
        converter,
    })
}

fn parse_address(name: &'static str, value: Option<String>) -> Result<Address, ConfigError> {
    let value = value.ok_or(ConfigError::MissingAddress { name })?;
    value
        .trim()
        .parse::<Address>()
        .map_err(|err| ConfigError::InvalidAddress {
            name,
            value: value.clone(),
            reason: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    fn example_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("metronome.example.toml")
    }

    #[test]
    fn parses_example_config() {
        let config = load_config(example_path()).expect("should parse example config");

        assert_eq!(config.rpc_url.as_deref(), Some("http://localhost:8545"));
        assert_eq!(
            config.contracts.auctions.as_deref(),
            Some("0xabc1230000000000000000000000000000000001")
        );
        assert_eq!(
            config.contracts.converter.as_deref(),
            Some("0xabc1230000000000000000000000000000000002")
        );
    }

    #[test]
    fn first_existing_path_wins() {
        let missing = PathBuf::from("does-not-exist.toml");

        let config = load_first(&[missing.clone(), example_path()]).unwrap();
        assert!(config.rpc_url.is_some());

        let config = load_first(&[missing]).unwrap();
        assert_eq!(config, StatusConfig::default());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = find_config(Some(Path::new("does-not-exist.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn overrides_take_precedence() {
        let config = load_config(example_path()).unwrap();
        let endpoint = resolve_endpoint(
            config,
            Overrides {
                rpc_url: Some("http://node:8545".into()),
                converter: Some("0x0000000000000000000000000000000000000042".into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(
            endpoint,
            Endpoint {
                rpc_url: "http://node:8545".into(),
                auctions: address!("0xabc1230000000000000000000000000000000001"),
                converter: address!("0x0000000000000000000000000000000000000042"),
            }
        );
    }

    #[test]
    fn missing_values_are_reported() {
        let err = resolve_endpoint(StatusConfig::default(), Overrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRpcUrl));

        let err = resolve_endpoint(
            StatusConfig::default(),
            Overrides {
                rpc_url: Some("http://localhost:8545".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingAddress { name: "auctions" }));
    }

    #[test]
    fn invalid_address_is_rejected() {
        let err = resolve_endpoint(
            StatusConfig::default(),
            Overrides {
                rpc_url: Some("http://localhost:8545".into()),
                auctions: Some("0xnot-an-address".into()),
                converter: Some("0x0000000000000000000000000000000000000042".into()),
            },
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidAddress {
                name: "auctions",
                ..
            }
        ));
    }
}
