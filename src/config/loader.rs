//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading generator
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Gender;

use super::types::{AgeLimits, GeneratorConfig, GeneratorSettings, NameLists};

const GENERATOR_FILE: &str = "generator.yaml";
const NAMES_FILE: &str = "names.yaml";

const EMBEDDED_GENERATOR: &str = include_str!("../../config/generator.yaml");
const EMBEDDED_NAMES: &str = include_str!("../../config/names.yaml");

/// Loads and provides access to generator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── generator.yaml  # Accepted age limits
/// └── names.yaml      # First names and surnames per gender
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_analytics::config::ConfigLoader;
/// use employee_analytics::models::Gender;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("{} male first names", loader.names().first_names(Gender::Male).len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: GeneratorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A name list is empty or the age limits are inverted
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let generator_path = path.join(GENERATOR_FILE);
        let settings = Self::load_yaml::<GeneratorSettings>(&generator_path)?;

        let names_path = path.join(NAMES_FILE);
        let names = Self::load_yaml::<NameLists>(&names_path)?;

        Self::validate(
            &generator_path.display().to_string(),
            &names_path.display().to_string(),
            &settings,
            &names,
        )?;

        debug!(path = %path.display(), "Loaded generator configuration");

        Ok(Self {
            config: GeneratorConfig::new(settings, names),
        })
    }

    /// Loads the configuration bundled with the crate.
    ///
    /// # Example
    ///
    /// ```
    /// use employee_analytics::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::embedded()?;
    /// assert_eq!(loader.age_limits().min, 18);
    /// assert_eq!(loader.age_limits().max, 100);
    /// # Ok::<(), employee_analytics::error::EngineError>(())
    /// ```
    pub fn embedded() -> EngineResult<Self> {
        let settings = Self::parse_yaml::<GeneratorSettings>(EMBEDDED_GENERATOR, GENERATOR_FILE)?;
        let names = Self::parse_yaml::<NameLists>(EMBEDDED_NAMES, NAMES_FILE)?;
        Self::validate(GENERATOR_FILE, NAMES_FILE, &settings, &names)?;

        Ok(Self {
            config: GeneratorConfig::new(settings, names),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, path: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    fn validate(
        generator_path: &str,
        names_path: &str,
        settings: &GeneratorSettings,
        names: &NameLists,
    ) -> EngineResult<()> {
        let limits = settings.age_limits;
        if limits.min > limits.max {
            return Err(EngineError::ConfigParseError {
                path: generator_path.to_string(),
                message: format!(
                    "age_limits.min ({}) is greater than age_limits.max ({})",
                    limits.min, limits.max
                ),
            });
        }

        for gender in Gender::ALL {
            let lists = names.for_gender(gender);
            for (field, list) in [("first_names", &lists.first_names), ("surnames", &lists.surnames)] {
                if list.is_empty() {
                    return Err(EngineError::ConfigParseError {
                        path: names_path.to_string(),
                        message: format!("{}.{} must not be empty", gender.as_str(), field),
                    });
                }
            }
        }

        Ok(())
    }

    /// Returns the accepted age bounds.
    pub fn age_limits(&self) -> AgeLimits {
        self.config.age_limits()
    }

    /// Returns the name lists.
    pub fn names(&self) -> &NameLists {
        self.config.names()
    }
}
