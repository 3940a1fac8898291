//! Motion application shell
//!
//! Owns both frame loops and routes platform events to them. The two loops
//! share no state; a frame event simply advances each in turn.

use anyhow::Result;
use stride_animation::{
    Diagnostics, FrameInfo, FrameScheduler, GateState, MotionSnapshot, ParallaxEngine,
    ParallaxTargets, ParticleSystem, PointerSample, RecordedTarget,
};
use stride_core::Size;
use stride_paint::PaintContext;
use stride_platform::{ControlFlow, Event, InputEvent, LifecycleEvent, Viewport, WindowEvent};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::report::SceneTransforms;

/// Inspection handles for the presentation targets handed to the engine
#[derive(Default)]
struct SceneHandles {
    background: Option<RecordedTarget>,
    subject: Option<RecordedTarget>,
    companion: Option<RecordedTarget>,
}

impl SceneHandles {
    fn transforms(&self) -> SceneTransforms {
        let render = |t: &Option<RecordedTarget>| {
            t.as_ref()
                .and_then(RecordedTarget::last)
                .map(|transform| transform.to_string())
        };
        SceneTransforms {
            background: render(&self.background),
            subject: render(&self.subject),
            companion: render(&self.companion),
        }
    }
}

/// Parallax and particle loops bound to one page
pub struct MotionApp {
    parallax: ParallaxEngine,
    particles: FrameScheduler<ParticleSystem<PaintContext>>,
    particles_enabled: bool,
    scene: SceneHandles,
    viewport: Viewport,
    surface_size: Size,
    last_particle_fills: usize,
    initialized: bool,
}

impl MotionApp {
    /// Build the app from configuration; both loops start stopped
    pub fn new(config: &AppConfig) -> Result<Self> {
        config.validate()?;

        let mut scene = SceneHandles::default();
        let mut targets = ParallaxTargets::new();
        if config.scene.background {
            let target = RecordedTarget::new();
            targets = targets.with_background(target.clone());
            scene.background = Some(target);
        }
        if config.scene.subject {
            let target = RecordedTarget::new();
            targets = targets.with_subject(target.clone());
            scene.subject = Some(target);
        }
        if config.scene.companion {
            let target = RecordedTarget::new();
            targets = targets.with_companion(target.clone());
            scene.companion = Some(target);
        }

        let viewport = config.viewport;
        let parallax = ParallaxEngine::new(config.environment, viewport.size(), targets);

        let surface_size = config.scene.particle_surface;
        let surface = PaintContext::with_pixel_ratio(surface_size, viewport.device_pixel_ratio);
        let system = ParticleSystem::new(config.particles.clone(), surface)?;

        let particles_enabled =
            !(config.particles.gate_on_reduced_motion && config.environment.reduced_motion);

        Ok(Self {
            parallax,
            particles: FrameScheduler::new("ParticleLoop", system),
            particles_enabled,
            scene,
            viewport,
            surface_size,
            last_particle_fills: 0,
            initialized: false,
        })
    }

    /// Apply the startup decision for both loops
    ///
    /// Only the first call has an effect.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        let state = self.parallax.init();
        if self.particles_enabled {
            self.particles.start();
        } else {
            debug!("MotionApp: particle loop gated by reduced motion");
        }
        info!(
            "MotionApp: initialized (parallax {:?}, particles {})",
            state,
            if self.particles.is_running() {
                "running"
            } else {
                "stopped"
            }
        );
    }

    /// Route one platform event
    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Window(WindowEvent::Resized { width, height }) => {
                self.resize(*width, *height);
            }
            Event::Window(WindowEvent::ScaleFactorChanged { scale_factor }) => {
                self.viewport.device_pixel_ratio = *scale_factor;
                self.resize_surface();
            }
            Event::Input(InputEvent::PointerMoved { x, y }) => {
                self.parallax.pointer_moved(PointerSample { x: *x, y: *y });
            }
            Event::Input(InputEvent::Scroll { offset }) => {
                self.parallax.scrolled(*offset);
            }
            Event::Lifecycle(LifecycleEvent::Ready) => self.init(),
            Event::Lifecycle(LifecycleEvent::BeforeUnload) => {
                self.parallax.teardown();
                return ControlFlow::Exit;
            }
            Event::Frame { frame, time_ms } => {
                self.frame(&FrameInfo::new(*frame, *time_ms));
            }
        }
        ControlFlow::Continue
    }

    /// Advance both loops by one display frame
    pub fn frame(&mut self, info: &FrameInfo) {
        self.parallax.frame(info);
        if self.particles.on_frame(info) {
            let surface = self.particles.task_mut().surface_mut();
            self.last_particle_fills = surface.fill_count();
            // presented; the host rasterizes these and we start fresh next frame
            surface.take_commands();
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.viewport = self.viewport.with_size(width, height);
        if let Some(state) = self.parallax.resized(self.viewport.size()) {
            debug!("MotionApp: resize to {}x{} -> {:?}", width, height, state);
        }
        self.resize_surface();
    }

    fn resize_surface(&mut self) {
        let dpr = self.viewport.device_pixel_ratio;
        self.particles
            .task_mut()
            .surface_mut()
            .resize(self.surface_size, dpr);
    }

    pub fn parallax(&self) -> &ParallaxEngine {
        &self.parallax
    }

    pub fn parallax_mut(&mut self) -> &mut ParallaxEngine {
        &mut self.parallax
    }

    /// Diagnostics handle for the parallax loop
    pub fn diagnostics(&mut self) -> &mut dyn Diagnostics {
        &mut self.parallax
    }

    pub fn parallax_state(&self) -> GateState {
        self.parallax.state()
    }

    pub fn snapshot(&self) -> MotionSnapshot {
        self.parallax.snapshot()
    }

    pub fn particles(&self) -> &ParticleSystem<PaintContext> {
        self.particles.task()
    }

    pub fn particles_running(&self) -> bool {
        self.particles.is_running()
    }

    /// Frames the particle loop has simulated
    pub fn particle_frames(&self) -> u64 {
        self.particles.tick_count()
    }

    /// Fills issued by the most recent particle frame
    pub fn last_particle_fills(&self) -> usize {
        self.last_particle_fills
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Last transform written to each presentation target
    pub fn transforms(&self) -> SceneTransforms {
        self.scene.transforms()
    }
}
