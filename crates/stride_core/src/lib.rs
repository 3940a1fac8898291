//! Stride Core
//!
//! Foundational 2D types shared by the Stride motion crates:
//!
//! - **Geometry**: points, sizes, rectangles and 2D affine transforms
//! - **Brushes**: colors and linear gradients
//! - **Draw Context**: a canvas-like drawing trait with a transform stack,
//!   plus a `RecordingContext` that captures commands for later replay
//!
//! # Example
//!
//! ```rust
//! use stride_core::{Color, DrawContext, Path, RecordingContext, Size, Transform};
//!
//! let mut ctx = RecordingContext::new(Size::new(300.0, 300.0));
//! ctx.push_transform(Transform::translate(10.0, 20.0));
//! ctx.fill_path(
//!     &Path::new().move_to(0.0, -2.0).line_to(2.0, 2.0).line_to(-2.0, 2.0).close(),
//!     Color::WHITE.into(),
//! );
//! ctx.pop_transform();
//!
//! assert_eq!(ctx.commands().len(), 3);
//! ```

pub mod brush;
pub mod draw;
pub mod geometry;

pub use brush::{Brush, Color, Gradient, GradientStop};
pub use draw::{DrawCommand, DrawContext, Path, PathCommand, RecordingContext, Transform};
pub use geometry::{Affine2D, Point, Rect, Size, Vec2};
