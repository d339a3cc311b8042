//! Configuration loading and management for record generation.
//!
//! This module provides functionality to load generator configurations from
//! YAML files: the accepted age limits and the name lists per gender.
//!
//! # Example
//!
//! ```no_run
//! use employee_analytics::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Ages accepted from {}", config.age_limits().min);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AgeLimits, GenderNames, GeneratorConfig, GeneratorSettings, NameLists};
