// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{MapperError, Result};
use crate::models::EnvelopeTemplate;
use crate::utils::Validator;
use crate::utils::logging::init_logger;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub index: IndexConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    pub name: String,
    pub doc_type: String,
    #[serde(default)]
    pub start_id: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("GREENCALL")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| MapperError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| MapperError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            index: IndexConfig {
                name: "ipythonsearch".to_string(),
                doc_type: "website".to_string(),
                start_id: 0,
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Envelope shape every emitted document is stamped from.
    pub fn envelope_template(&self) -> Result<EnvelopeTemplate> {
        EnvelopeTemplate::new(&self.index.name, &self.index.doc_type)
    }

    /// Installs the tracing subscriber from `[logging]`. Returns false if one was
    /// already installed.
    pub fn init_logging(&self) -> bool {
        init_logger(self.logging.color, self.logging.verbose)
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_index_name(&self.index.name)
            .map_err(|e| MapperError::Config(e.to_string()))?;
        Validator::validate_doc_type(&self.index.doc_type)
            .map_err(|e| MapperError::Config(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());

        let template = config.envelope_template().unwrap();
        assert_eq!(template.index(), "ipythonsearch");
        assert_eq!(template.doc_type(), "website");
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("greencall.toml");
        fs::write(
            &path,
            "[index]\nname = \"accounts-search\"\ndoc_type = \"result\"\nstart_id = 500\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.index.name, "accounts-search");
        assert_eq!(config.index.doc_type, "result");
        assert_eq!(config.index.start_id, 500);
        assert!(config.logging.color);
    }

    #[test]
    fn test_load_logging_section() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("greencall.toml");
        fs::write(
            &path,
            "[index]\nname = \"ipythonsearch\"\ndoc_type = \"website\"\n\n[logging]\nverbose = true\ncolor = false\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert!(config.logging.verbose);
        assert!(!config.logging.color);

        config.init_logging();
        assert!(!config.init_logging());
    }

    #[test]
    fn test_load_rejects_invalid_index_name() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("greencall.toml");
        fs::write(&path, "[index]\nname = \"Bad Index\"\ndoc_type = \"website\"\n").unwrap();

        let result = Config::load(Some(path.as_path()));
        assert!(matches!(result, Err(MapperError::Config(_))));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(Some(temp.path().join("absent.toml").as_path()));
        assert!(result.is_err());
    }
}
