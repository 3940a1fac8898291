//! Stride Paint/Canvas API
//!
//! A small 2D drawing surface, similar to an HTML canvas, sized in logical
//! pixels and backed by `logical_size * device_pixel_ratio` physical pixels.
//! All core types are shared with stride_core.
//!
//! # Example
//!
//! ```ignore
//! use stride_paint::{DrawContext, PaintContext, Size, Transform};
//!
//! let mut ctx = PaintContext::with_pixel_ratio(Size::new(300.0, 300.0), 2.0);
//! ctx.clear_rect(ctx.logical_size().to_rect());
//! ctx.save();
//! ctx.push_transform(Transform::translate(40.0, 250.0));
//! ctx.push_transform(Transform::rotate(0.3));
//! ctx.fill_path(&triangle(4.0), gradient.into());
//! ctx.restore();
//!
//! let commands = ctx.take_commands();
//! ```

pub mod context;
pub mod gradient;
pub mod primitives;

pub use stride_core::{
    Brush, Color, DrawCommand, DrawContext, Gradient, GradientStop, Path, PathCommand, Point, Rect,
    Size, Transform,
};

pub use context::PaintContext;
pub use primitives::triangle;
