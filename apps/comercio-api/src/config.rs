//! Configuration for the comercio API

use core_config::{
    app_info, database::DatabaseConfig, env_or_default, server::ServerConfig, AppInfo, ConfigError,
    FromEnv,
};
use domain_suppliers::RegistryClient;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub environment: Environment,
    /// Directory where uploaded category images are stored
    pub upload_dir: String,
    /// Base URL of the taxpayer (CNPJ) registry
    pub cnpj_api_url: String,
    /// Base URL of the postal-code (CEP) registry
    pub cep_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            environment: Environment::from_env(),
            upload_dir: env_or_default("UPLOAD_DIR", "uploads"),
            cnpj_api_url: env_or_default("CNPJ_API_URL", RegistryClient::DEFAULT_CNPJ_BASE_URL),
            cep_api_url: env_or_default("CEP_API_URL", RegistryClient::DEFAULT_CEP_BASE_URL),
        })
    }
}
