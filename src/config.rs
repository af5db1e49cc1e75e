use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use serde::Deserialize;

/// Name of the optional configuration file read from the working directory.
const CONFIG_FILE: &str = "paste.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_bind_address")]
    pub bind_address: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub storage: StorageKind,
    /// Connection string for the document store. Only checked when the store
    /// is first used, so the service starts without it.
    #[serde(default)]
    pub mongodb_connection: Option<String>,
    #[serde(default = "default_database_name")]
    pub database_name: String,
    #[serde(default = "default_collection_name")]
    pub collection_name: String,
    #[serde(default = "default_max_paste_size")]
    pub max_paste_size: u64,
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    #[serde(default)]
    pub adjectives_file: Option<PathBuf>,
    #[serde(default)]
    pub nouns_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Mongo,
    /// Keep pastes in process memory only.
    Memory,
}

impl Config {
    /// Read the config file (if any) and the process environment.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_with(::config::Environment::default())
    }

    fn load_with(environment: ::config::Environment) -> Result<Self, ::config::ConfigError> {
        ::config::Config::builder()
            .add_source(::config::File::with_name(CONFIG_FILE).required(false))
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: default_bind_address(),
            port: default_port(),
            storage: StorageKind::default(),
            mongodb_connection: None,
            database_name: default_database_name(),
            collection_name: default_collection_name(),
            max_paste_size: default_max_paste_size(),
            max_body_size: default_max_body_size(),
            adjectives_file: None,
            nouns_file: None,
        }
    }
}

fn default_bind_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8000
}

fn default_database_name() -> String {
    "paste".to_owned()
}

fn default_collection_name() -> String {
    "entries".to_owned()
}

fn default_max_paste_size() -> u64 {
    10_000
}

fn default_max_body_size() -> usize {
    1024 * 1024
}
