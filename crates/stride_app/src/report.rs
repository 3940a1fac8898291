//! Report output model for headless scenario runs.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use stride_animation::MotionSnapshot;

/// Overall status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Outcome of one assertion step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssertionRecord {
    pub step_index: usize,
    pub assertion: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AssertionRecord {
    pub fn passed(step_index: usize, assertion: &str) -> Self {
        Self {
            step_index,
            assertion: assertion.to_string(),
            passed: true,
            message: None,
        }
    }

    pub fn failed(step_index: usize, assertion: &str, message: String) -> Self {
        Self {
            step_index,
            assertion: assertion.to_string(),
            passed: false,
            message: Some(message),
        }
    }
}

/// Last transform written to each presentation target, in CSS form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SceneTransforms {
    pub background: Option<String>,
    pub subject: Option<String>,
    pub companion: Option<String>,
}

/// Machine-readable result of a scenario run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub status: ReportStatus,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    pub parallax_running: bool,
    pub parallax_ticks: u64,
    pub particle_frames: u64,
    pub snapshot: MotionSnapshot,
    pub transforms: SceneTransforms,
    /// Step at which the app asked to exit; later steps were not run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exited_at_step: Option<usize>,
    pub assertions: Vec<AssertionRecord>,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.status == ReportStatus::Passed
    }

    /// Assertions that did not hold
    pub fn failures(&self) -> impl Iterator<Item = &AssertionRecord> {
        self.assertions.iter().filter(|a| !a.passed)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = self.to_json()?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
