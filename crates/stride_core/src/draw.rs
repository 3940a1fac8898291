//! Draw Context - canvas-like rendering API
//!
//! The `DrawContext` trait is the drawing surface the particle renderer
//! targets. It mirrors the small subset of an HTML canvas the engine needs:
//!
//! - a transform stack (save/translate/rotate/restore)
//! - clearing a region
//! - filling a vector path with a brush
//!
//! `RecordingContext` implements the trait by recording `DrawCommand`s, which
//! makes rendering inspectable in tests and replayable by a real backend.
//!
//! # Example
//!
//! ```ignore
//! fn paint(ctx: &mut dyn DrawContext) {
//!     ctx.save();
//!     ctx.push_transform(Transform::translate(10.0, 20.0));
//!     ctx.push_transform(Transform::rotate(0.5));
//!     ctx.fill_path(&triangle, gradient.into());
//!     ctx.restore();
//! }
//! ```

use crate::brush::Brush;
use crate::geometry::{Affine2D, Point, Rect, Size};

// ─────────────────────────────────────────────────────────────────────────────
// Transform Types
// ─────────────────────────────────────────────────────────────────────────────

/// A 2D transform pushed onto the draw context's stack
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform(pub Affine2D);

impl Transform {
    /// Create a 2D translation
    pub fn translate(x: f32, y: f32) -> Self {
        Transform(Affine2D::translation(x, y))
    }

    /// Create a 2D scale around the origin (0, 0)
    pub fn scale(sx: f32, sy: f32) -> Self {
        Transform(Affine2D::scale(sx, sy))
    }

    /// Create a 2D rotation around the origin (angle in radians)
    pub fn rotate(angle: f32) -> Self {
        Transform(Affine2D::rotation(angle))
    }

    /// Create identity transform
    pub fn identity() -> Self {
        Transform(Affine2D::IDENTITY)
    }

    /// Compose: the result applies `other` first, then `self`
    pub fn then(&self, other: &Transform) -> Transform {
        Transform(self.0.then(&other.0))
    }

    pub fn transform_point(&self, point: Point) -> Point {
        self.0.transform_point(point)
    }
}

impl From<Affine2D> for Transform {
    fn from(t: Affine2D) -> Self {
        Transform(t)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Types
// ─────────────────────────────────────────────────────────────────────────────

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// The points visited by this path, in order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::Close => None,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DrawContext Trait
// ─────────────────────────────────────────────────────────────────────────────

/// The drawing surface interface
pub trait DrawContext {
    /// Push a transform; it is composed with the current one
    fn push_transform(&mut self, transform: Transform);

    /// Pop the top transform from the stack
    fn pop_transform(&mut self);

    /// Get the current combined transform
    fn current_transform(&self) -> Transform;

    /// Remember the current transform stack depth
    fn save(&mut self);

    /// Pop every transform pushed since the matching `save()`
    fn restore(&mut self);

    /// Clear a region to transparent
    fn clear_rect(&mut self, rect: Rect);

    /// Fill a path with a brush, under the current transform
    fn fill_path(&mut self, path: &Path, brush: Brush);

    /// Logical size of the surface
    fn viewport_size(&self) -> Size;
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushTransform(Transform),
    PopTransform,
    Clear(Rect),
    FillPath {
        path: Path,
        brush: Brush,
        /// Combined transform in effect when the fill was issued
        transform: Transform,
    },
}

/// A draw context that records commands for later execution
#[derive(Debug)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Transform>,
    /// Stack depth at each `save()`
    saved_depths: Vec<usize>,
    viewport: Size,
}

impl RecordingContext {
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            transform_stack: vec![Transform::identity()],
            saved_depths: Vec::new(),
            viewport,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Replace the base transform (bottom of the stack), e.g. a device pixel scale
    ///
    /// Pushed transforms and saved states are dropped.
    pub fn set_base_transform(&mut self, transform: Transform) {
        self.transform_stack.clear();
        self.transform_stack.push(transform);
        self.saved_depths.clear();
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Number of `FillPath` commands recorded so far
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillPath { .. }))
            .count()
    }
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl DrawContext for RecordingContext {
    fn push_transform(&mut self, transform: Transform) {
        self.commands.push(DrawCommand::PushTransform(transform));
        let combined = self.current_transform().then(&transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.commands.push(DrawCommand::PopTransform);
        if self.transform_stack.len() > 1 {
            self.transform_stack.pop();
        }
    }

    fn current_transform(&self) -> Transform {
        self.transform_stack.last().copied().unwrap_or_default()
    }

    fn save(&mut self) {
        self.saved_depths.push(self.transform_stack.len());
    }

    fn restore(&mut self) {
        let depth = self.saved_depths.pop().unwrap_or(1).max(1);
        while self.transform_stack.len() > depth {
            self.pop_transform();
        }
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn fill_path(&mut self, path: &Path, brush: Brush) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            brush,
            transform: self.current_transform(),
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::Color;

    #[test]
    fn test_transform_stack_composes() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        ctx.push_transform(Transform::translate(10.0, 5.0));
        ctx.push_transform(Transform::scale(2.0, 2.0));

        let p = ctx.current_transform().transform_point(Point::new(1.0, 1.0));
        assert_eq!(p, Point::new(12.0, 7.0));

        ctx.pop_transform();
        ctx.pop_transform();
        // Popping past the base is a no-op
        ctx.pop_transform();
        assert_eq!(ctx.current_transform(), Transform::identity());
    }

    #[test]
    fn test_fill_records_transform() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        ctx.push_transform(Transform::translate(3.0, 4.0));
        ctx.fill_path(&Path::new().move_to(0.0, 0.0).close(), Color::WHITE.into());

        match &ctx.commands()[1] {
            DrawCommand::FillPath { transform, .. } => {
                assert_eq!(transform.transform_point(Point::ZERO), Point::new(3.0, 4.0));
            }
            other => panic!("expected FillPath, got {:?}", other),
        }
        assert_eq!(ctx.fill_count(), 1);
    }

    #[test]
    fn test_restore_unwinds_to_saved_depth() {
        let mut ctx = RecordingContext::new(Size::new(10.0, 10.0));
        ctx.set_base_transform(Transform::scale(2.0, 2.0));
        ctx.push_transform(Transform::translate(1.0, 1.0));

        ctx.save();
        ctx.push_transform(Transform::rotate(0.5));
        ctx.push_transform(Transform::translate(4.0, 0.0));
        ctx.restore();

        let p = ctx.current_transform().transform_point(Point::ZERO);
        assert_eq!(p, Point::new(2.0, 2.0));
        let pops = ctx
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::PopTransform))
            .count();
        assert_eq!(pops, 2);

        // unmatched restore never pops the base
        ctx.restore();
        ctx.restore();
        assert_eq!(ctx.current_transform(), Transform::scale(2.0, 2.0));
    }
}
