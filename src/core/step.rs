use serde::{Deserialize, Serialize};

/// One labelled line of a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub label: String,
    #[serde(flatten)]
    pub operation: Operation,
}

impl Step {
    pub fn new(label: impl Into<String>, operation: Operation) -> Self {
        Self {
            label: label.into(),
            operation,
        }
    }
}

/// Operands stay in their text forms (`HH:MM:SS` for times, `H:MM:SS` for
/// durations) until the step is evaluated, so a bad operand fails only its
/// own step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Time { value: String },
    Period { value: String },
    CompareTimes { left: String, right: String },
    ComparePeriods { left: String, right: String },
    AddToTime { time: String, duration: String },
    AddPeriods { left: String, right: String },
    SubtractPeriods { left: String, right: String },
    Span { start: String, end: String },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Time { .. } => "time",
            Operation::Period { .. } => "period",
            Operation::CompareTimes { .. } => "compare_times",
            Operation::ComparePeriods { .. } => "compare_periods",
            Operation::AddToTime { .. } => "add_to_time",
            Operation::AddPeriods { .. } => "add_periods",
            Operation::SubtractPeriods { .. } => "subtract_periods",
            Operation::Span { .. } => "span",
        }
    }
}
