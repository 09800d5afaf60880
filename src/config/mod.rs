use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub external_url: Option<String>,
    pub api_rate_limit: u64,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub allergen_path: PathBuf,
    pub recipe_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub recipe_default_limit: usize,
    pub recipe_max_limit: usize,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PORT value".to_string()))?;

        let external_url = std::env::var("EXTERNAL_URL").ok();

        let api_rate_limit = std::env::var("API_RATE_LIMIT")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid API_RATE_LIMIT value".to_string()))?;

        let max_request_body_size = std::env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| "1048576".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_REQUEST_BODY_SIZE value".to_string()))?;

        let allergen_path = std::env::var("ALLERGEN_DATA_PATH")
            .unwrap_or_else(|_| "./data/allergens.json".to_string())
            .into();

        let recipe_path = std::env::var("RECIPE_DATA_PATH")
            .unwrap_or_else(|_| "./data/recipes.json".to_string())
            .into();

        let recipe_default_limit = std::env::var("RECIPE_DEFAULT_LIMIT")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid RECIPE_DEFAULT_LIMIT value".to_string()))?;

        let recipe_max_limit = std::env::var("RECIPE_MAX_LIMIT")
            .unwrap_or_else(|_| "50".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid RECIPE_MAX_LIMIT value".to_string()))?;

        Ok(Settings {
            server: ServerConfig {
                host,
                port,
                external_url,
                api_rate_limit,
                max_request_body_size,
            },
            data: DataConfig {
                allergen_path,
                recipe_path,
            },
            search: SearchConfig {
                recipe_default_limit,
                recipe_max_limit,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.server.api_rate_limit == 0 {
            return Err(Error::Config("API rate limit must be non-zero".to_string()));
        }

        if self.search.recipe_default_limit == 0 {
            return Err(Error::Config(
                "Default recipe limit must be non-zero".to_string(),
            ));
        }

        if self.search.recipe_default_limit > self.search.recipe_max_limit {
            return Err(Error::Config(format!(
                "Default recipe limit ({}) exceeds maximum ({})",
                self.search.recipe_default_limit, self.search.recipe_max_limit
            )));
        }

        Ok(())
    }

    /// Base URL used by the CLI client subcommands
    pub fn server_url(&self) -> String {
        self.server
            .external_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.server.host, self.server.port))
    }
}

#[cfg(test)]
pub(crate) fn test_settings() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            external_url: None,
            api_rate_limit: 100,
            max_request_body_size: 1048576,
        },
        data: DataConfig {
            allergen_path: "/tmp/allergens.json".into(),
            recipe_path: "/tmp/recipes.json".into(),
        },
        search: SearchConfig {
            recipe_default_limit: 5,
            recipe_max_limit: 50,
        },
    }
}
