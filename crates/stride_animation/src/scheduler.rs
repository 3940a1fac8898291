//! Frame scheduler
//!
//! A cooperative per-frame loop driven by the host's display refresh. The
//! host calls [`FrameScheduler::on_frame`] once per display frame; the
//! scheduler runs its task only while a tick is armed, and a running tick
//! re-arms itself for the next frame.
//!
//! Stopping is deferred: [`FrameScheduler::stop`] only clears the running
//! flag. The tick already armed for the next frame observes the flag, lets
//! the task wind down through [`FrameTask::on_stop`], and does not re-arm.
//! Because the armed flag is never set twice, a `start()` that lands between
//! a `stop()` and that final tick simply resumes the existing loop. There is
//! never more than one loop per scheduler.

use tracing::{debug, trace};

/// Timing information passed to every tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInfo {
    /// Host frame counter
    pub frame: u64,
    /// Host timestamp in milliseconds
    pub time_ms: f64,
}

impl FrameInfo {
    pub fn new(frame: u64, time_ms: f64) -> Self {
        Self { frame, time_ms }
    }
}

/// Work performed once per frame while a scheduler is running
pub trait FrameTask {
    /// Advance one frame
    fn tick(&mut self, frame: &FrameInfo);

    /// Final tick after a stop was observed
    fn on_stop(&mut self) {}
}

/// Start/stop-able frame loop around a single task
pub struct FrameScheduler<T: FrameTask> {
    name: &'static str,
    task: T,
    running: bool,
    /// A tick is queued for the next display frame
    armed: bool,
    ticks: u64,
}

impl<T: FrameTask> FrameScheduler<T> {
    /// Create a stopped scheduler
    pub fn new(name: &'static str, task: T) -> Self {
        Self {
            name,
            task,
            running: false,
            armed: false,
            ticks: 0,
        }
    }

    /// Start the loop
    ///
    /// Returns `false` (and does nothing) if the loop is already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        if !self.armed {
            self.armed = true;
            debug!("{}: loop started", self.name);
        } else {
            debug!("{}: loop resumed before its final tick", self.name);
        }
        true
    }

    /// Request the loop to stop at its next tick
    pub fn stop(&mut self) {
        if self.running {
            debug!("{}: stop requested", self.name);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a tick is queued for the next frame
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Number of task ticks performed so far
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn task(&self) -> &T {
        &self.task
    }

    pub fn task_mut(&mut self) -> &mut T {
        &mut self.task
    }

    pub fn into_task(self) -> T {
        self.task
    }

    /// Deliver one display frame
    ///
    /// Returns `true` if the task ticked.
    pub fn on_frame(&mut self, frame: &FrameInfo) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;

        if !self.running {
            self.task.on_stop();
            debug!("{}: loop ended after {} ticks", self.name, self.ticks);
            return false;
        }

        self.task.tick(frame);
        self.ticks += 1;
        self.armed = true;
        trace!("{}: tick {} (frame {})", self.name, self.ticks, frame.frame);
        true
    }
}
