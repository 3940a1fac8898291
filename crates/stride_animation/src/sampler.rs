//! Input sampling
//!
//! Maps a pointer position inside the viewport to parallax targets, and a
//! scroll offset to the background's vertical shift.

use stride_core::{Size, Vec2};

/// Horizontal/vertical travel of the background per unit of normalized pointer
pub const BACKGROUND_RANGE: Vec2 = Vec2::new(5.0, 5.0);

/// Travel of the foreground subject; it moves against the pointer
pub const SUBJECT_RANGE: Vec2 = Vec2::new(-8.0, -4.8);

/// Fraction of the subject's offset applied to the companion entity
pub const COMPANION_DEPTH: f32 = 0.8;

/// Background shift per pixel of page scroll
pub const SCROLL_FACTOR: f32 = -0.5;

/// Smallest denominator used when normalizing against a degenerate viewport
const MIN_EXTENT: f32 = 1.0;

/// A pointer event position; either coordinate may be missing
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl PointerSample {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Position in `[-1, 1]` on each axis, `(0, 0)` at the viewport center
    ///
    /// A missing coordinate is treated as the viewport center. Coordinates
    /// outside the viewport are clamped.
    pub fn normalize(&self, viewport: Size) -> Vec2 {
        Vec2::new(
            normalize_axis(self.x, viewport.width),
            normalize_axis(self.y, viewport.height),
        )
    }
}

fn normalize_axis(value: Option<f32>, extent: f32) -> f32 {
    let extent = if extent.is_finite() {
        extent.max(MIN_EXTENT)
    } else {
        MIN_EXTENT
    };
    let half = extent / 2.0;
    match value {
        Some(v) if v.is_finite() => ((v - half) / half).clamp(-1.0, 1.0),
        _ => 0.0,
    }
}

/// Targets produced by one pointer sample
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SampledTargets {
    pub background: Vec2,
    pub subject: Vec2,
}

impl SampledTargets {
    /// Targets for a normalized pointer position
    pub fn from_normalized(n: Vec2) -> Self {
        Self {
            background: Vec2::new(n.x * BACKGROUND_RANGE.x, n.y * BACKGROUND_RANGE.y),
            subject: Vec2::new(n.x * SUBJECT_RANGE.x, n.y * SUBJECT_RANGE.y),
        }
    }

    pub fn sample(pointer: PointerSample, viewport: Size) -> Self {
        Self::from_normalized(pointer.normalize(viewport))
    }
}

/// Companion offset derived from the subject's current position
pub fn companion_offset(subject_current: Vec2) -> Vec2 {
    subject_current.scale(COMPANION_DEPTH)
}

/// Vertical background shift for a page scroll offset
pub fn scroll_shift(offset: f32) -> f32 {
    offset * SCROLL_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn test_center_maps_to_zero() {
        let viewport = Size::new(1000.0, 800.0);
        let targets = SampledTargets::sample(PointerSample::at(500.0, 400.0), viewport);
        assert!(approx(targets.background, Vec2::ZERO));
        assert!(approx(targets.subject, Vec2::ZERO));
    }

    #[test]
    fn test_corner_maps_to_extremes() {
        let viewport = Size::new(1000.0, 800.0);
        let targets = SampledTargets::sample(PointerSample::at(1000.0, 0.0), viewport);
        assert!(approx(targets.background, Vec2::new(5.0, -5.0)));
        assert!(approx(targets.subject, Vec2::new(-8.0, 4.8)));
    }

    #[test]
    fn test_missing_coordinate_is_center() {
        let viewport = Size::new(1000.0, 800.0);
        let sample = PointerSample {
            x: None,
            y: Some(800.0),
        };
        assert!(approx(sample.normalize(viewport), Vec2::new(0.0, 1.0)));
        assert_eq!(PointerSample::default().normalize(viewport), Vec2::ZERO);
    }

    #[test]
    fn test_outside_viewport_is_clamped() {
        let viewport = Size::new(1000.0, 800.0);
        let n = PointerSample::at(-500.0, 5000.0).normalize(viewport);
        assert_eq!(n, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_degenerate_viewport_stays_finite() {
        let n = PointerSample::at(10.0, 10.0).normalize(Size::ZERO);
        assert!(n.x.is_finite() && n.y.is_finite());
        assert!(n.x.abs() <= 1.0 && n.y.abs() <= 1.0);
    }

    #[test]
    fn test_companion_and_scroll() {
        assert!(approx(
            companion_offset(Vec2::new(-8.0, 4.0)),
            Vec2::new(-6.4, 3.2)
        ));
        assert_eq!(scroll_shift(200.0), -100.0);
        assert_eq!(scroll_shift(0.0), 0.0);
    }
}
