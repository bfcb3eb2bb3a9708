use crate::config::script_config::ScriptConfig;
use crate::core::demo;
use crate::core::step::{Operation, Step};
use crate::domain::TimeOfDay;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "time-app")]
#[command(about = "Time-of-day and duration calculator")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON", global = true)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the built-in sample script
    Demo,
    /// Run a TOML script file
    Run { script: String },
    /// Parse and normalise a time of day (HH:MM:SS)
    Time { value: String },
    /// Parse and normalise a duration (H:MM:SS)
    Period { value: String },
    /// Add a duration to a time of day, wrapping past midnight
    AddTime { time: String, duration: String },
    /// Add two durations
    Add { left: String, right: String },
    /// Subtract the second duration from the first
    Sub { left: String, right: String },
    /// Duration between two times of day
    Span { start: String, end: String },
    /// Compare two times of day
    Compare { left: String, right: String },
    /// Print the local wall-clock time
    Now,
}

impl CliConfig {
    /// Turns the selected command into a script for the evaluator.
    pub fn to_script(&self) -> Result<ScriptConfig> {
        let operation = match &self.command {
            Command::Demo => return demo::sample_script(),
            Command::Run { script } => return ScriptConfig::from_file(script),
            Command::Time { value } => Operation::Time {
                value: value.clone(),
            },
            Command::Period { value } => Operation::Period {
                value: value.clone(),
            },
            Command::AddTime { time, duration } => Operation::AddToTime {
                time: time.clone(),
                duration: duration.clone(),
            },
            Command::Add { left, right } => Operation::AddPeriods {
                left: left.clone(),
                right: right.clone(),
            },
            Command::Sub { left, right } => Operation::SubtractPeriods {
                left: left.clone(),
                right: right.clone(),
            },
            Command::Span { start, end } => Operation::Span {
                start: start.clone(),
                end: end.clone(),
            },
            Command::Compare { left, right } => Operation::CompareTimes {
                left: left.clone(),
                right: right.clone(),
            },
            Command::Now => Operation::Time {
                value: TimeOfDay::now_local().to_string(),
            },
        };
        let label = operation.name().to_string();
        Ok(ScriptConfig::single(Step::new(label, operation)))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Command::Run { script } = &self.command {
            validation::validate_script_path("script", script)?;
        }
        Ok(())
    }
}
