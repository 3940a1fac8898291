//! Scenario definition for headless motion runs.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Sequence of scripted steps.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("Failed to parse scenario JSON")
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_json(&raw)
    }
}

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    PointerMove {
        #[serde(default)]
        x: Option<f32>,
        #[serde(default)]
        y: Option<f32>,
    },
    Scroll {
        offset: f32,
    },
    Resize {
        width: f32,
        height: f32,
    },
    Tick {
        frames: u32,
    },
    Start,
    Stop,
    Unload,
    AssertRunning {
        expected: bool,
    },
    AssertTargetsZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_every_step() {
        let scenario = Scenario::from_json(
            r#"{ "steps": [
                { "type": "pointer_move", "x": 10.0 },
                { "type": "scroll", "offset": 40.0 },
                { "type": "resize", "width": 400.0, "height": 700.0 },
                { "type": "tick", "frames": 3 },
                { "type": "start" },
                { "type": "stop" },
                { "type": "unload" },
                { "type": "assert_running", "expected": false },
                { "type": "assert_targets_zero" }
            ] }"#,
        )
        .unwrap();

        assert_eq!(scenario.steps.len(), 9);
        assert_eq!(
            scenario.steps[0],
            ScenarioStep::PointerMove {
                x: Some(10.0),
                y: None
            }
        );
        assert_eq!(scenario.steps[8], ScenarioStep::AssertTargetsZero);
    }

    #[test]
    fn test_unknown_step_is_an_error() {
        assert!(Scenario::from_json(r#"{ "steps": [{ "type": "jump" }] }"#).is_err());
    }
}
