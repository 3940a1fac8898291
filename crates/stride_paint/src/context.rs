//! Paint context - canvas-like drawing surface implementing DrawContext
//!
//! PaintContext wraps a RecordingContext and adds what a real canvas element
//! has on top of raw drawing: a logical size and a device pixel ratio.

use stride_core::{Brush, DrawCommand, DrawContext, Path, Rect, RecordingContext, Size, Transform};

/// The paint context used for the particle surface
pub struct PaintContext {
    recording: RecordingContext,
    logical_size: Size,
    pixel_ratio: f32,
}

impl PaintContext {
    /// Create a new paint context with the given logical size and a pixel ratio of 1
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_pixel_ratio(Size::new(width, height), 1.0)
    }

    /// Create a context backed by `logical_size * pixel_ratio` physical pixels
    pub fn with_pixel_ratio(logical_size: Size, pixel_ratio: f32) -> Self {
        let mut ctx = Self {
            recording: RecordingContext::new(logical_size),
            logical_size,
            pixel_ratio: 1.0,
        };
        ctx.resize(logical_size, pixel_ratio);
        ctx
    }

    /// Resize the backing store and reset the device pixel scale
    ///
    /// Like resizing a canvas element, this drops any saved drawing state.
    pub fn resize(&mut self, logical_size: Size, pixel_ratio: f32) {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            tracing::warn!(
                "PaintContext: invalid device pixel ratio {}, using 1.0",
                pixel_ratio
            );
            1.0
        };

        self.logical_size = logical_size;
        self.pixel_ratio = pixel_ratio;
        self.recording.set_viewport(logical_size);
        self.recording
            .set_base_transform(Transform::scale(pixel_ratio, pixel_ratio));

        tracing::debug!(
            "PaintContext: resized to {}x{} logical ({}x{} physical)",
            logical_size.width,
            logical_size.height,
            self.physical_size().width,
            self.physical_size().height
        );
    }

    pub fn logical_size(&self) -> Size {
        self.logical_size
    }

    /// Backing store size in device pixels
    pub fn physical_size(&self) -> Size {
        self.logical_size.scaled(self.pixel_ratio)
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        self.recording.commands()
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.recording.take_commands()
    }

    /// Number of fills recorded since the last `take_commands()`
    pub fn fill_count(&self) -> usize {
        self.recording.fill_count()
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DrawContext Implementation - delegates to RecordingContext
// ═══════════════════════════════════════════════════════════════════════════════

impl DrawContext for PaintContext {
    fn push_transform(&mut self, transform: Transform) {
        self.recording.push_transform(transform);
    }

    fn pop_transform(&mut self) {
        self.recording.pop_transform();
    }

    fn current_transform(&self) -> Transform {
        self.recording.current_transform()
    }

    fn save(&mut self) {
        self.recording.save();
    }

    fn restore(&mut self) {
        self.recording.restore();
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.recording.clear_rect(rect);
    }

    fn fill_path(&mut self, path: &Path, brush: Brush) {
        self.recording.fill_path(path, brush);
    }

    fn viewport_size(&self) -> Size {
        self.logical_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::{Color, Point};

    #[test]
    fn test_physical_size_follows_pixel_ratio() {
        let mut ctx = PaintContext::with_pixel_ratio(Size::new(300.0, 200.0), 2.0);
        assert_eq!(ctx.physical_size(), Size::new(600.0, 400.0));

        ctx.resize(Size::new(320.0, 240.0), 1.5);
        assert_eq!(ctx.physical_size(), Size::new(480.0, 360.0));
        assert_eq!(ctx.logical_size(), Size::new(320.0, 240.0));
    }

    #[test]
    fn test_invalid_pixel_ratio_falls_back() {
        let ctx = PaintContext::with_pixel_ratio(Size::new(10.0, 10.0), 0.0);
        assert_eq!(ctx.pixel_ratio(), 1.0);
    }

    #[test]
    fn test_base_transform_scales_by_pixel_ratio() {
        let mut ctx = PaintContext::with_pixel_ratio(Size::new(300.0, 300.0), 2.0);
        ctx.push_transform(Transform::translate(10.0, 10.0));
        let p = ctx.current_transform().transform_point(Point::ZERO);
        assert_eq!(p, Point::new(20.0, 20.0));
    }

    #[test]
    fn test_save_restore_unwinds() {
        let mut ctx = PaintContext::with_pixel_ratio(Size::new(100.0, 100.0), 2.0);
        ctx.save();
        ctx.push_transform(Transform::translate(5.0, 5.0));
        ctx.push_transform(Transform::rotate(1.0));
        ctx.fill_path(&Path::new().move_to(0.0, 0.0), Color::WHITE.into());
        ctx.restore();

        assert_eq!(ctx.current_transform(), Transform::scale(2.0, 2.0));
        let pops = ctx
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::PopTransform))
            .count();
        assert_eq!(pops, 2);
    }

    #[test]
    fn test_resize_drops_saved_state() {
        let mut ctx = PaintContext::new(100.0, 100.0);
        ctx.save();
        ctx.push_transform(Transform::translate(5.0, 5.0));
        ctx.resize(Size::new(50.0, 50.0), 1.0);

        // nothing left to unwind
        ctx.restore();
        assert!(!ctx
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::PopTransform)));
        assert_eq!(ctx.current_transform(), Transform::scale(1.0, 1.0));
    }
}
