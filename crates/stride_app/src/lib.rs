//! Stride Application Shell
//!
//! Wires the parallax engine and the particle loop to platform events, and
//! runs them headlessly against scripted scenarios.
//!
//! # Example
//!
//! ```
//! use stride_app::{run_scenario_json, AppConfig, MotionApp};
//!
//! let mut app = MotionApp::new(&AppConfig::default()).unwrap();
//! let report = run_scenario_json(
//!     &mut app,
//!     r#"{ "steps": [
//!         { "type": "pointer_move", "x": 0.0, "y": 0.0 },
//!         { "type": "tick", "frames": 30 },
//!         { "type": "assert_running", "expected": true }
//!     ] }"#,
//!     16,
//! )
//! .unwrap();
//! assert!(report.passed());
//! ```

pub mod app;
pub mod config;
pub mod report;
pub mod runner;
pub mod runtime;
pub mod scenario;

pub use app::MotionApp;
pub use config::{AppConfig, SceneConfig};
pub use report::{AssertionRecord, ReportStatus, RunReport, SceneTransforms};
pub use runner::{run_scenario, run_scenario_json};
pub use runtime::{FrameClock, HeadlessRunConfig, HeadlessRuntime};
pub use scenario::{Scenario, ScenarioStep};
