pub mod demo;
pub mod evaluator;
pub mod step;

pub use crate::utils::error::Result;
pub use evaluator::{Evaluator, Report, StepOutcome};
pub use step::{Operation, Step};
