//! Scenario runner that drives a `MotionApp` through scripted steps.

use anyhow::{bail, Result};
use stride_platform::{ControlFlow, Event, InputEvent, LifecycleEvent, WindowEvent};
use tracing::{debug, warn};

use crate::app::MotionApp;
use crate::report::{AssertionRecord, ReportStatus, RunReport};
use crate::runtime::FrameClock;
use crate::scenario::{Scenario, ScenarioStep};

/// Execute scenario JSON against `app`.
pub fn run_scenario_json(app: &mut MotionApp, input: &str, tick_ms: u64) -> Result<RunReport> {
    let scenario = Scenario::from_json(input)?;
    run_scenario(app, &scenario, tick_ms)
}

/// Execute a loaded scenario against `app`.
///
/// The app receives a `Ready` event first. Failed assertions are recorded
/// and the run continues. Once the app asks to exit (an `unload` step), the
/// remaining steps are skipped and the report records where the run ended.
pub fn run_scenario(app: &mut MotionApp, scenario: &Scenario, tick_ms: u64) -> Result<RunReport> {
    if tick_ms == 0 {
        bail!("headless tick_ms must be > 0");
    }

    let mut clock = FrameClock::new(tick_ms);
    let mut assertions = Vec::new();
    let mut exited_at_step = None;

    app.handle_event(&Event::Lifecycle(LifecycleEvent::Ready));

    for (step_index, step) in scenario.steps.iter().enumerate() {
        debug!("scenario step {}: {:?}", step_index, step);
        let flow = match step {
            ScenarioStep::PointerMove { x, y } => {
                app.handle_event(&Event::Input(InputEvent::PointerMoved { x: *x, y: *y }))
            }
            ScenarioStep::Scroll { offset } => {
                app.handle_event(&Event::Input(InputEvent::Scroll { offset: *offset }))
            }
            ScenarioStep::Resize { width, height } => {
                app.handle_event(&Event::Window(WindowEvent::Resized {
                    width: *width,
                    height: *height,
                }))
            }
            ScenarioStep::Tick { frames } => {
                let mut flow = ControlFlow::Continue;
                for _ in 0..*frames {
                    flow = app.handle_event(&clock.next_event());
                    if flow == ControlFlow::Exit {
                        break;
                    }
                }
                flow
            }
            ScenarioStep::Start => {
                app.diagnostics().start();
                ControlFlow::Continue
            }
            ScenarioStep::Stop => {
                app.diagnostics().stop();
                ControlFlow::Continue
            }
            ScenarioStep::Unload => {
                app.handle_event(&Event::Lifecycle(LifecycleEvent::BeforeUnload))
            }
            ScenarioStep::AssertRunning { expected } => {
                let actual = app.diagnostics().is_running();
                assertions.push(if actual == *expected {
                    AssertionRecord::passed(step_index, "assert_running")
                } else {
                    AssertionRecord::failed(
                        step_index,
                        "assert_running",
                        format!("expected running = {expected}, got {actual}"),
                    )
                });
                ControlFlow::Continue
            }
            ScenarioStep::AssertTargetsZero => {
                let motion = app.parallax().motion();
                assertions.push(if motion.targets_are_zero() {
                    AssertionRecord::passed(step_index, "assert_targets_zero")
                } else {
                    AssertionRecord::failed(
                        step_index,
                        "assert_targets_zero",
                        format!(
                            "background target {:?}, subject target {:?}",
                            motion.background.target(),
                            motion.subject.target()
                        ),
                    )
                });
                ControlFlow::Continue
            }
        };

        if flow == ControlFlow::Exit {
            let skipped = scenario.steps.len() - step_index - 1;
            debug!("scenario exited at step {}, skipping {} steps", step_index, skipped);
            exited_at_step = Some(step_index);
            break;
        }
    }

    let status = if assertions.iter().all(|a| a.passed) {
        ReportStatus::Passed
    } else {
        ReportStatus::Failed
    };
    for failure in assertions.iter().filter(|a| !a.passed) {
        warn!(
            "step {} {} failed: {}",
            failure.step_index,
            failure.assertion,
            failure.message.as_deref().unwrap_or_default()
        );
    }

    Ok(RunReport {
        status,
        elapsed_frames: clock.elapsed_frames(),
        elapsed_ms: clock.elapsed_ms(),
        parallax_running: app.parallax().is_running(),
        parallax_ticks: app.parallax().tick_count(),
        particle_frames: app.particle_frames(),
        snapshot: app.snapshot(),
        transforms: app.transforms(),
        exited_at_step,
        assertions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn app() -> MotionApp {
        let mut config = AppConfig::default();
        config.particles.seed = Some(5);
        MotionApp::new(&config).unwrap()
    }

    #[test]
    fn test_empty_scenario_passes() {
        let mut app = app();
        let report = run_scenario_json(&mut app, r#"{ "steps": [] }"#, 16).unwrap();
        assert!(report.passed());
        assert_eq!(report.elapsed_frames, 0);
        assert!(report.parallax_running);
    }

    #[test]
    fn test_failed_assertion_is_recorded() {
        let mut app = app();
        let report = run_scenario_json(
            &mut app,
            r#"{ "steps": [
                { "type": "assert_running", "expected": false },
                { "type": "tick", "frames": 2 },
                { "type": "assert_targets_zero" }
            ] }"#,
            16,
        )
        .unwrap();

        assert_eq!(report.status, ReportStatus::Failed);
        assert_eq!(report.failures().count(), 1);
        assert_eq!(report.assertions[0].step_index, 0);
        assert!(report.assertions[1].passed);
        assert_eq!(report.elapsed_ms, 32);
    }

    #[test]
    fn test_zero_tick_is_rejected() {
        let mut app = app();
        assert!(run_scenario_json(&mut app, r#"{ "steps": [] }"#, 0).is_err());
    }

    #[test]
    fn test_unload_ends_the_run() {
        let mut app = app();
        let report = run_scenario_json(
            &mut app,
            r#"{ "steps": [
                { "type": "tick", "frames": 3 },
                { "type": "unload" },
                { "type": "tick", "frames": 5 },
                { "type": "start" },
                { "type": "tick", "frames": 5 },
                { "type": "assert_running", "expected": true }
            ] }"#,
            16,
        )
        .unwrap();

        assert_eq!(report.exited_at_step, Some(1));
        assert!(report.passed());
        assert!(report.assertions.is_empty());
        assert!(!report.parallax_running);
        assert_eq!(report.elapsed_frames, 3);
        assert_eq!(report.parallax_ticks, 3);
        assert_eq!(report.particle_frames, 3);
    }
}
