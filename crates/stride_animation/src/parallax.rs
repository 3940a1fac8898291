//! Parallax engine
//!
//! Ties the motion state, input sampling, frame scheduler and lifecycle gate
//! together for the layered parallax effect. The engine never looks up
//! elements itself: it is handed optional [`PresentationTarget`]s and writes
//! a [`LayerTransform`] into each one every frame.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use stride_core::Size;
use tracing::debug;

use crate::gate::{GateState, LifecycleGate, MotionEnvironment};
use crate::motion::{MotionSnapshot, MotionState, BACKGROUND_SMOOTHING, SUBJECT_SMOOTHING};
use crate::sampler::{companion_offset, scroll_shift, PointerSample, SampledTargets};
use crate::scheduler::{FrameInfo, FrameScheduler, FrameTask};

/// Scale applied to the background while it follows the pointer
pub const BACKGROUND_POINTER_SCALE: f32 = 1.02;

/// Scale applied to the background while it follows page scroll
pub const BACKGROUND_SCROLL_SCALE: f32 = 1.05;

// ─────────────────────────────────────────────────────────────────────────────
// Presentation
// ─────────────────────────────────────────────────────────────────────────────

/// Translation (and optional uniform scale) written to a presentation target
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerTransform {
    pub x: f32,
    pub y: f32,
    pub scale: Option<f32>,
}

impl LayerTransform {
    pub fn translate(x: f32, y: f32) -> Self {
        Self { x, y, scale: None }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }
}

impl fmt::Display for LayerTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate3d({}px, {}px, 0)", self.x, self.y)?;
        if let Some(scale) = self.scale {
            write!(f, " scale({})", scale)?;
        }
        Ok(())
    }
}

/// Write-only consumer of layer transforms
pub trait PresentationTarget {
    fn apply_transform(&mut self, transform: LayerTransform);
}

impl<F: FnMut(LayerTransform)> PresentationTarget for F {
    fn apply_transform(&mut self, transform: LayerTransform) {
        self(transform)
    }
}

#[derive(Debug, Default)]
struct TargetRecord {
    last: Option<LayerTransform>,
    writes: usize,
}

/// A presentation target that remembers what was written to it
///
/// Clones share the same record, so one clone can be handed to the engine
/// while another is kept for inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordedTarget {
    record: Rc<RefCell<TargetRecord>>,
}

impl RecordedTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last transform written, if any
    pub fn last(&self) -> Option<LayerTransform> {
        self.record.borrow().last
    }

    /// Number of transforms written so far
    pub fn writes(&self) -> usize {
        self.record.borrow().writes
    }
}

impl PresentationTarget for RecordedTarget {
    fn apply_transform(&mut self, transform: LayerTransform) {
        let mut record = self.record.borrow_mut();
        record.last = Some(transform);
        record.writes += 1;
    }
}

/// The animated entities present on the page; any of them may be absent
#[derive(Default)]
pub struct ParallaxTargets {
    pub background: Option<Box<dyn PresentationTarget>>,
    pub subject: Option<Box<dyn PresentationTarget>>,
    pub companion: Option<Box<dyn PresentationTarget>>,
}

impl ParallaxTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, target: impl PresentationTarget + 'static) -> Self {
        self.background = Some(Box::new(target));
        self
    }

    pub fn with_subject(mut self, target: impl PresentationTarget + 'static) -> Self {
        self.subject = Some(Box::new(target));
        self
    }

    pub fn with_companion(mut self, target: impl PresentationTarget + 'static) -> Self {
        self.companion = Some(Box::new(target));
        self
    }

    /// Whether the pointer-driven path has anything to move
    ///
    /// The companion only follows the subject, so it does not count on its own.
    pub fn has_animated_entity(&self) -> bool {
        self.background.is_some() || self.subject.is_some()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-frame task
// ─────────────────────────────────────────────────────────────────────────────

/// One parallax frame: advance every present entity and write its transform
pub struct ParallaxTask {
    motion: MotionState,
    targets: ParallaxTargets,
}

impl ParallaxTask {
    pub fn new(targets: ParallaxTargets) -> Self {
        Self {
            motion: MotionState::default(),
            targets,
        }
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    pub fn targets(&self) -> &ParallaxTargets {
        &self.targets
    }

    fn apply_sample(&mut self, sampled: SampledTargets) {
        if self.targets.background.is_some() {
            self.motion.background.set_target(sampled.background);
        }
        if self.targets.subject.is_some() {
            self.motion.subject.set_target(sampled.subject);
        }
    }
}

impl FrameTask for ParallaxTask {
    fn tick(&mut self, _frame: &FrameInfo) {
        if let Some(background) = self.targets.background.as_mut() {
            self.motion.background.step(BACKGROUND_SMOOTHING);
            let current = self.motion.background.current();
            background.apply_transform(
                LayerTransform::translate(current.x, current.y)
                    .with_scale(BACKGROUND_POINTER_SCALE),
            );
        }

        if let Some(subject) = self.targets.subject.as_mut() {
            self.motion.subject.step(SUBJECT_SMOOTHING);
            let current = self.motion.subject.current();
            subject.apply_transform(LayerTransform::translate(current.x, current.y));
        }

        if let Some(companion) = self.targets.companion.as_mut() {
            let offset = companion_offset(self.motion.subject.current());
            companion.apply_transform(LayerTransform::translate(offset.x, offset.y));
        }
    }

    fn on_stop(&mut self) {
        self.motion.reset_targets();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine
// ─────────────────────────────────────────────────────────────────────────────

/// Pointer/scroll driven parallax, gated by viewport and accessibility signals
pub struct ParallaxEngine {
    gate: LifecycleGate,
    scheduler: FrameScheduler<ParallaxTask>,
    viewport: Size,
}

impl ParallaxEngine {
    /// Create a stopped engine; call [`ParallaxEngine::init`] to apply the
    /// startup decision
    pub fn new(env: MotionEnvironment, viewport: Size, targets: ParallaxTargets) -> Self {
        Self {
            gate: LifecycleGate::new(env, viewport.width),
            scheduler: FrameScheduler::new("ParallaxEngine", ParallaxTask::new(targets)),
            viewport,
        }
    }

    /// Start the loop if the startup signals allow it
    pub fn init(&mut self) -> GateState {
        let has_entity = self.scheduler.task().targets.has_animated_entity();
        let state = self.gate.initial_state(has_entity);
        debug!(
            "ParallaxEngine: init at {}x{} -> {:?}",
            self.viewport.width, self.viewport.height, state
        );
        if state == GateState::Running {
            self.start();
        }
        self.state()
    }

    pub fn start(&mut self) {
        self.scheduler.start();
    }

    /// Stop the loop and zero every target
    ///
    /// Current values are left where they are.
    pub fn stop(&mut self) {
        self.scheduler.stop();
        self.scheduler.task_mut().motion.reset_targets();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn state(&self) -> GateState {
        GateState::from_running(self.is_running())
    }

    pub fn gate(&self) -> &LifecycleGate {
        &self.gate
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn motion(&self) -> &MotionState {
        self.scheduler.task().motion()
    }

    pub fn snapshot(&self) -> MotionSnapshot {
        self.motion().snapshot()
    }

    pub fn tick_count(&self) -> u64 {
        self.scheduler.tick_count()
    }

    /// Update targets from a pointer position
    pub fn pointer_moved(&mut self, pointer: PointerSample) {
        if !self.gate.allows_pointer_sampling() {
            return;
        }
        let task = self.scheduler.task_mut();
        if !task.targets.has_animated_entity() {
            return;
        }
        let sampled = SampledTargets::sample(pointer, self.viewport);
        task.apply_sample(sampled);
    }

    /// Shift the background for a page scroll offset
    ///
    /// Written straight to the background target, bypassing smoothing.
    pub fn scrolled(&mut self, offset: f32) {
        if !self.gate.allows_scroll_shift() {
            return;
        }
        if let Some(background) = self.scheduler.task_mut().targets.background.as_mut() {
            background.apply_transform(
                LayerTransform::translate(0.0, scroll_shift(offset))
                    .with_scale(BACKGROUND_SCROLL_SCALE),
            );
        }
    }

    /// Apply a viewport resize; returns the transition taken, if any
    pub fn resized(&mut self, viewport: Size) -> Option<GateState> {
        self.viewport = viewport;
        let transition = self.gate.on_resize(viewport.width)?;
        match transition {
            GateState::Stopped => self.stop(),
            GateState::Running => self.start(),
        }
        Some(transition)
    }

    /// Page teardown
    pub fn teardown(&mut self) {
        debug!("ParallaxEngine: teardown");
        self.stop();
    }

    /// Deliver one display frame; returns `true` if the loop ticked
    pub fn frame(&mut self, frame: &FrameInfo) -> bool {
        self.scheduler.on_frame(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::Vec2;

    fn pump(engine: &mut ParallaxEngine, frames: u64) {
        for i in 0..frames {
            engine.frame(&FrameInfo::new(i, i as f64 * 16.0));
        }
    }

    fn full_scene() -> (ParallaxTargets, RecordedTarget, RecordedTarget, RecordedTarget) {
        let bg = RecordedTarget::new();
        let subject = RecordedTarget::new();
        let companion = RecordedTarget::new();
        let targets = ParallaxTargets::new()
            .with_background(bg.clone())
            .with_subject(subject.clone())
            .with_companion(companion.clone());
        (targets, bg, subject, companion)
    }

    #[test]
    fn test_layer_transform_display() {
        let t = LayerTransform::translate(1.5, -2.0).with_scale(1.02);
        assert_eq!(t.to_string(), "translate3d(1.5px, -2px, 0) scale(1.02)");
        assert_eq!(
            LayerTransform::translate(0.0, 3.0).to_string(),
            "translate3d(0px, 3px, 0)"
        );
    }

    #[test]
    fn test_init_respects_gate() {
        let (targets, ..) = full_scene();
        let mut engine =
            ParallaxEngine::new(MotionEnvironment::default(), Size::new(600.0, 800.0), targets);
        assert_eq!(engine.init(), GateState::Running);

        let mut empty = ParallaxEngine::new(
            MotionEnvironment::default(),
            Size::new(600.0, 800.0),
            ParallaxTargets::new(),
        );
        assert_eq!(empty.init(), GateState::Stopped);
    }

    #[test]
    fn test_frames_write_transforms() {
        let (targets, bg, subject, companion) = full_scene();
        let mut engine =
            ParallaxEngine::new(MotionEnvironment::default(), Size::new(1000.0, 1000.0), targets);
        engine.init();
        engine.pointer_moved(PointerSample::at(0.0, 0.0));
        pump(&mut engine, 1);

        let bg_t = bg.last().unwrap();
        assert!((bg_t.x - -5.0 * BACKGROUND_SMOOTHING).abs() < 1e-5);
        assert_eq!(bg_t.scale, Some(BACKGROUND_POINTER_SCALE));

        let subject_t = subject.last().unwrap();
        assert!((subject_t.x - 8.0 * SUBJECT_SMOOTHING).abs() < 1e-5);
        assert_eq!(subject_t.scale, None);

        let companion_t = companion.last().unwrap();
        assert!((companion_t.x - subject_t.x * 0.8).abs() < 1e-5);
        assert!((companion_t.y - subject_t.y * 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_absent_background_keeps_target_zero() {
        let subject = RecordedTarget::new();
        let targets = ParallaxTargets::new().with_subject(subject.clone());
        let mut engine =
            ParallaxEngine::new(MotionEnvironment::default(), Size::new(1000.0, 1000.0), targets);
        engine.init();
        engine.pointer_moved(PointerSample::at(0.0, 0.0));

        assert_eq!(engine.motion().background.target(), Vec2::ZERO);
        assert_eq!(engine.motion().subject.target(), Vec2::new(8.0, 4.8));
    }

    #[test]
    fn test_breakpoint_scenario() {
        let (targets, ..) = full_scene();
        let mut engine =
            ParallaxEngine::new(MotionEnvironment::default(), Size::new(600.0, 800.0), targets);
        assert_eq!(engine.init(), GateState::Running);
        engine.pointer_moved(PointerSample::at(0.0, 0.0));
        pump(&mut engine, 5);

        assert_eq!(
            engine.resized(Size::new(400.0, 800.0)),
            Some(GateState::Stopped)
        );
        assert_eq!(engine.state(), GateState::Stopped);
        assert!(engine.motion().targets_are_zero());

        // small viewport ignores the pointer
        engine.pointer_moved(PointerSample::at(0.0, 0.0));
        assert!(engine.motion().targets_are_zero());

        assert_eq!(
            engine.resized(Size::new(600.0, 800.0)),
            Some(GateState::Running)
        );
        assert!(engine.is_running());
    }

    #[test]
    fn test_touch_device_ignores_pointer() {
        let (targets, ..) = full_scene();
        let env = MotionEnvironment::default().with_coarse_pointer(true);
        let mut engine = ParallaxEngine::new(env, Size::new(1000.0, 1000.0), targets);
        engine.init();
        engine.pointer_moved(PointerSample::at(0.0, 0.0));
        assert!(engine.motion().targets_are_zero());
    }

    #[test]
    fn test_stop_then_frames_trend_to_zero() {
        let (targets, ..) = full_scene();
        let mut engine =
            ParallaxEngine::new(MotionEnvironment::default(), Size::new(1000.0, 1000.0), targets);
        engine.init();
        engine.pointer_moved(PointerSample::at(0.0, 0.0));
        pump(&mut engine, 30);
        let before = engine.snapshot();

        engine.stop();
        engine.start();
        pump(&mut engine, 200);

        let after = engine.snapshot();
        assert!(after.subject_x.abs() < before.subject_x.abs());
        assert!(after.subject_x.abs() < 1e-3);
        assert!(after.background_x.abs() < 1e-3);
    }

    #[test]
    fn test_double_start_single_loop() {
        let (targets, ..) = full_scene();
        let mut engine =
            ParallaxEngine::new(MotionEnvironment::default(), Size::new(1000.0, 1000.0), targets);
        engine.start();
        engine.start();
        pump(&mut engine, 12);
        assert_eq!(engine.tick_count(), 12);
    }

    #[test]
    fn test_scroll_writes_background_directly() {
        let (targets, bg, ..) = full_scene();
        let mut engine =
            ParallaxEngine::new(MotionEnvironment::default(), Size::new(1000.0, 1000.0), targets);
        engine.scrolled(120.0);
        assert_eq!(
            bg.last(),
            Some(LayerTransform::translate(0.0, -60.0).with_scale(BACKGROUND_SCROLL_SCALE))
        );

        let (targets, bg, ..) = full_scene();
        let env = MotionEnvironment::default().with_reduced_motion(true);
        let mut reduced = ParallaxEngine::new(env, Size::new(1000.0, 1000.0), targets);
        reduced.scrolled(120.0);
        assert_eq!(bg.writes(), 0);
    }

    #[test]
    fn test_teardown_stops() {
        let (targets, ..) = full_scene();
        let mut engine =
            ParallaxEngine::new(MotionEnvironment::default(), Size::new(1000.0, 1000.0), targets);
        engine.init();
        engine.pointer_moved(PointerSample::at(100.0, 100.0));
        engine.teardown();
        assert!(!engine.is_running());
        assert!(engine.motion().targets_are_zero());
    }
}
