use crate::core::step::Step;
use crate::utils::error::{Result, TimeError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A TOML script: a header plus an ordered list of `[[steps]]`.
///
/// ```toml
/// [script]
/// name = "shift"
///
/// [[steps]]
/// label = "Shift length"
/// op = "span"
/// start = "09:00:00"
/// end = "17:30:00"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub script: ScriptInfo,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptInfo {
    pub name: String,
    pub description: Option<String>,
    pub continue_on_error: Option<bool>,
}

impl ScriptConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading script from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Wraps a single step into an anonymous one-step script.
    pub fn single(step: Step) -> Self {
        Self {
            script: ScriptInfo {
                name: step.operation.name().to_string(),
                description: None,
                continue_on_error: Some(false),
            },
            steps: vec![step],
        }
    }
}

impl Validate for ScriptConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("script.name", &self.script.name)?;

        if self.steps.is_empty() {
            return Err(TimeError::ConfigError {
                message: format!("script '{}' has no steps", self.script.name),
            });
        }

        for (index, step) in self.steps.iter().enumerate() {
            let field = format!("steps[{}].label", index);
            validation::validate_non_empty_string(&field, &step.label)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::step::Operation;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_script() {
        let toml_content = r#"
[script]
name = "shift"
description = "Day shift"

[[steps]]
label = "Start"
op = "time"
value = "09:00:00"

[[steps]]
label = "Shift length"
op = "span"
start = "09:00:00"
end = "17:30:00"

[[steps]]
label = "Overtime"
op = "add_periods"
left = "8:30:00"
right = "1:15:00"
"#;

        let config = ScriptConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.script.name, "shift");
        assert_eq!(config.steps.len(), 3);
        assert_eq!(
            config.steps[1].operation,
            Operation::Span {
                start: "09:00:00".to_string(),
                end: "17:30:00".to_string(),
            }
        );
        assert_eq!(
            config.steps[2].operation,
            Operation::AddPeriods {
                left: "8:30:00".to_string(),
                right: "1:15:00".to_string(),
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_operand_loads() {
        let toml_content = r#"
[script]
name = "bad"

[[steps]]
label = "Too late"
op = "time"
value = "25:00:00"
"#;

        let config = ScriptConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.steps[0].operation,
            Operation::Time {
                value: "25:00:00".to_string()
            }
        );

        let err = ScriptConfig::from_toml_str("[script]\nname = \"x\"\n[[steps]]\nlabel = 1\n")
            .unwrap_err();
        assert!(matches!(err, TimeError::TomlError(_)));
    }

    #[test]
    fn test_script_validation() {
        let config = ScriptConfig::from_toml_str("[script]\nname = \"empty\"\n").unwrap();
        assert!(matches!(config.validate(), Err(TimeError::ConfigError { .. })));

        let mut config = ScriptConfig::single(Step::new(
            "  ",
            Operation::Period {
                value: "0:00:00".to_string(),
            },
        ));
        assert!(matches!(
            config.validate(),
            Err(TimeError::InvalidConfigValueError { .. })
        ));
        config.steps[0].label = "zero".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_script_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = r#"
[script]
name = "file"

[[steps]]
label = "p"
op = "period"
value = "0:00:30"
"#;
        temp_file.write_all(content.as_bytes()).unwrap();

        let config = ScriptConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.script.name, "file");
        assert_eq!(
            config.steps[0].operation,
            Operation::Period {
                value: "0:00:30".to_string()
            }
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScriptConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, TimeError::IoError(_)));
    }
}
