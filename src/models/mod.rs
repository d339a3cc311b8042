//! Core data models for the Employee Analytics Engine.
//!
//! This module contains all the domain models used throughout the engine.

pub mod birthdate;
mod employee;
mod name_frequency;
mod statistics_result;

pub use employee::{Employee, Gender, Workload};
pub use name_frequency::{
    ChartPoint, NameCount, NameFrequencyResult, NameFrequencyTable, NameSlice, SliceFrequencies,
};
pub use statistics_result::StatisticsResult;
