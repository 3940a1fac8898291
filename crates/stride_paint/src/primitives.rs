//! Shape primitives

use crate::Path;

/// Ratio between a particle's nominal size and its triangle half-extent
const TRIANGLE_EXTENT_DIVISOR: f32 = 1.2;

/// An upward-pointing triangle centered on the local origin
///
/// The apex sits at `(0, -h)` and the base corners at `(±h, h)` where
/// `h = size / 1.2`.
pub fn triangle(size: f32) -> Path {
    let h = size / TRIANGLE_EXTENT_DIVISOR;
    Path::new()
        .move_to(0.0, -h)
        .line_to(h, h)
        .line_to(-h, h)
        .close()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PathCommand, Point};

    #[test]
    fn test_triangle_vertices() {
        let path = triangle(6.0);
        let points: Vec<Point> = path.points().collect();
        let expected = [
            Point::new(0.0, -5.0),
            Point::new(5.0, 5.0),
            Point::new(-5.0, 5.0),
        ];
        assert_eq!(points.len(), expected.len());
        for (p, e) in points.iter().zip(expected.iter()) {
            assert!((p.x - e.x).abs() < 1e-4 && (p.y - e.y).abs() < 1e-4);
        }
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
    }
}
