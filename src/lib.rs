//! Employee Analytics Engine
//!
//! This crate generates random employee records (gender, name, surname,
//! birthdate, workload) and derives descriptive statistics and first-name
//! frequency analytics from them.

#![warn(missing_docs)]

pub mod analytics;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
