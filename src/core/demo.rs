use crate::config::script_config::{ScriptConfig, ScriptInfo};
use crate::core::step::{Operation, Step};
use crate::domain::{Duration, TimeOfDay};
use crate::utils::error::Result;

/// The built-in sample: a couple of times and periods, built both from
/// components and from text, compared and combined.
pub fn sample_script() -> Result<ScriptConfig> {
    let time1 = TimeOfDay::new(10, 30, 45)?.to_string();
    let time2 = "08:15:30".to_string();
    let period1 = Duration::new(2, 30, 0).to_string();
    let period2 = "01:45:30".to_string();

    let steps = vec![
        Step::new(
            "Time 1",
            Operation::Time {
                value: time1.clone(),
            },
        ),
        Step::new(
            "Time 2",
            Operation::Time {
                value: time2.clone(),
            },
        ),
        Step::new(
            "Time 1 vs Time 2",
            Operation::CompareTimes {
                left: time1.clone(),
                right: time2,
            },
        ),
        Step::new(
            "Time 3 (Time 1 + 1:30:00)",
            Operation::AddToTime {
                time: time1,
                duration: Duration::from_hm(1, 30).to_string(),
            },
        ),
        Step::new(
            "Period 1",
            Operation::Period {
                value: period1.clone(),
            },
        ),
        Step::new(
            "Period 2",
            Operation::Period {
                value: period2.clone(),
            },
        ),
        Step::new(
            "Sum of periods",
            Operation::AddPeriods {
                left: period1.clone(),
                right: period2.clone(),
            },
        ),
        Step::new(
            "Difference of periods",
            Operation::SubtractPeriods {
                left: period1,
                right: period2,
            },
        ),
    ];

    Ok(ScriptConfig {
        script: ScriptInfo {
            name: "demo".to_string(),
            description: Some("Sample times and periods".to_string()),
            continue_on_error: Some(true),
        },
        steps,
    })
}
