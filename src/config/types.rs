//! Configuration types for record generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::Gender;

/// Inclusive bounds on the ages a caller may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AgeLimits {
    /// Lowest accepted age.
    pub min: u32,
    /// Highest accepted age.
    pub max: u32,
}

impl AgeLimits {
    /// Returns true if `age` lies within the limits.
    pub fn contains(&self, age: u32) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

impl Default for AgeLimits {
    fn default() -> Self {
        Self { min: 18, max: 100 }
    }
}

/// Generator configuration file structure (`generator.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    /// Accepted age bounds.
    #[serde(default)]
    pub age_limits: AgeLimits,
}

/// First names and surnames for one gender.
#[derive(Debug, Clone, Deserialize)]
pub struct GenderNames {
    /// First names to draw from.
    pub first_names: Vec<String>,
    /// Surnames to draw from.
    pub surnames: Vec<String>,
}

/// Name lists configuration file structure (`names.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct NameLists {
    /// Names for male employees.
    pub male: GenderNames,
    /// Names for female employees.
    pub female: GenderNames,
}

impl NameLists {
    /// Returns the names for a gender.
    pub fn for_gender(&self, gender: Gender) -> &GenderNames {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Returns the first names for a gender.
    pub fn first_names(&self, gender: Gender) -> &[String] {
        &self.for_gender(gender).first_names
    }

    /// Returns the surnames for a gender.
    pub fn surnames(&self, gender: Gender) -> &[String] {
        &self.for_gender(gender).surnames
    }
}

/// The complete generator configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    settings: GeneratorSettings,
    names: NameLists,
}

impl GeneratorConfig {
    /// Creates a new GeneratorConfig from its component parts.
    pub fn new(settings: GeneratorSettings, names: NameLists) -> Self {
        Self { settings, names }
    }

    /// Returns the accepted age bounds.
    pub fn age_limits(&self) -> AgeLimits {
        self.settings.age_limits
    }

    /// Returns the name lists.
    pub fn names(&self) -> &NameLists {
        &self.names
    }
}
