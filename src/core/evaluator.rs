use crate::config::script_config::ScriptConfig;
use crate::core::step::{Operation, Step};
use crate::domain::{Duration, TimeOfDay};
use crate::utils::error::Result;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::Display;

/// Serialized flattened into the outcome as either `"value"` or `"error"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepResult {
    Value(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    pub label: String,
    pub op: String,
    #[serde(flatten)]
    pub result: StepResult,
}

impl StepOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self.result, StepResult::Value(_))
    }

    pub fn value(&self) -> Option<&str> {
        match &self.result {
            StepResult::Value(value) => Some(value),
            StepResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.result {
            StepResult::Value(_) => None,
            StepResult::Error(error) => Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub script: String,
    pub outcomes: Vec<StepOutcome>,
}

impl Report {
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_ok()).count()
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for outcome in &self.outcomes {
            match &outcome.result {
                StepResult::Value(value) => {
                    out.push_str(&format!("{}: {}\n", outcome.label, value))
                }
                StepResult::Error(error) => {
                    out.push_str(&format!("{}: error: {}\n", outcome.label, error))
                }
            }
        }
        out
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct Evaluator {
    continue_on_error: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Evaluator {
    pub fn new(continue_on_error: bool) -> Self {
        Self { continue_on_error }
    }

    pub fn for_script(config: &ScriptConfig) -> Self {
        Self::new(config.script.continue_on_error.unwrap_or(true))
    }

    /// Parses the step's operands and computes its textual result.
    pub fn evaluate(&self, step: &Step) -> Result<String> {
        let value = match &step.operation {
            Operation::Time { value } => TimeOfDay::parse(value)?.to_string(),
            Operation::Period { value } => Duration::parse(value)?.to_string(),
            Operation::CompareTimes { left, right } => {
                let (left, right) = (TimeOfDay::parse(left)?, TimeOfDay::parse(right)?);
                comparison(&left, left.compare_to(&right), &right)
            }
            Operation::ComparePeriods { left, right } => {
                let (left, right) = (Duration::parse(left)?, Duration::parse(right)?);
                comparison(&left, left.compare_to(&right), &right)
            }
            Operation::AddToTime { time, duration } => TimeOfDay::parse(time)?
                .wrapping_add(Duration::parse(duration)?)
                .to_string(),
            Operation::AddPeriods { left, right } => Duration::parse(left)?
                .checked_add(Duration::parse(right)?)?
                .to_string(),
            Operation::SubtractPeriods { left, right } => Duration::parse(left)?
                .checked_sub(Duration::parse(right)?)?
                .to_string(),
            Operation::Span { start, end } => {
                Duration::between(TimeOfDay::parse(start)?, TimeOfDay::parse(end)?)?.to_string()
            }
        };
        tracing::debug!("{} [{}] = {}", step.label, step.operation.name(), value);
        Ok(value)
    }

    pub fn run(&self, config: &ScriptConfig) -> Result<Report> {
        tracing::info!(
            "Running script '{}' ({} steps)",
            config.script.name,
            config.steps.len()
        );

        let mut outcomes = Vec::with_capacity(config.steps.len());
        for step in &config.steps {
            let result = match self.evaluate(step) {
                Ok(value) => StepResult::Value(value),
                Err(e) if self.continue_on_error => {
                    tracing::warn!("Step '{}' failed: {}", step.label, e);
                    StepResult::Error(e.to_string())
                }
                Err(e) => {
                    tracing::debug!("Step '{}' failed, aborting script", step.label);
                    return Err(e);
                }
            };
            outcomes.push(StepOutcome {
                label: step.label.clone(),
                op: step.operation.name().to_string(),
                result,
            });
        }

        let report = Report {
            script: config.script.name.clone(),
            outcomes,
        };
        tracing::info!(
            "Script '{}' finished with {} failed step(s)",
            report.script,
            report.failures()
        );
        Ok(report)
    }
}

fn comparison(left: &impl Display, ordering: Ordering, right: &impl Display) -> String {
    let symbol = match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    };
    format!("{} {} {}", left, symbol, right)
}
