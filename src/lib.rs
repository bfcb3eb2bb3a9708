pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::ScriptConfig;
pub use crate::core::{Evaluator, Operation, Report, Step};
pub use domain::{Duration, TimeOfDay};
pub use utils::error::{Result, TimeError};
