//! Gradient fills - re-exported from stride_core for unified type system

pub use stride_core::{Gradient, GradientStop};

use crate::{Color, Point};

/// Create a simple linear gradient between two colors
pub fn linear_simple(start: Point, end: Point, from: Color, to: Color) -> Gradient {
    Gradient::linear(start, end, from, to)
}

/// Diagonal two-stop gradient across a `size x size` box anchored at the origin
///
/// This is the fill used for particles: the gradient runs from the local
/// origin to `(size, size)` so it rotates with the shape.
pub fn diagonal(size: f32, from: Color, to: Color) -> Gradient {
    linear_simple(Point::ZERO, Point::new(size, size), from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_endpoints() {
        match diagonal(5.0, Color::WHITE, Color::BLACK) {
            Gradient::Linear { start, end, .. } => {
                assert_eq!(start, Point::ZERO);
                assert_eq!(end, Point::new(5.0, 5.0));
            }
        }
    }
}
