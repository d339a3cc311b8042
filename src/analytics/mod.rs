//! Analytics over batches of employees.
//!
//! This module contains the statistics engine (workload histogram, age and
//! workload medians, averages, workload ordering), the name analytics engine
//! (ranked first-name frequencies per slice, chart data), the shared age and
//! median helpers, and output section selection.

mod age;
mod median;
mod name_frequency;
mod output;
mod statistics;

pub use age::{age_on, age_today, today};
pub use median::{median, round_one_decimal};
pub use name_frequency::{compute_name_frequencies, rank_names};
pub use output::{Section, SelectedOutput, select_output};
pub use statistics::compute_statistics;
