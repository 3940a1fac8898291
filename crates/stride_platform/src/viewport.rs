//! Viewport description

use serde::{Deserialize, Serialize};
use stride_core::Size;

use crate::error::{PlatformError, Result};

/// Visible page area and its device pixel ratio
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    /// Width in logical pixels
    pub width: f32,
    /// Height in logical pixels
    pub height: f32,
    /// Physical pixels per logical pixel
    pub device_pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    /// Create a validated viewport
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Result<Self> {
        let viewport = Self {
            width,
            height,
            device_pixel_ratio,
        };
        viewport.validate()?;
        Ok(viewport)
    }

    pub fn validate(&self) -> Result<()> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(PlatformError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !valid(self.device_pixel_ratio) {
            return Err(PlatformError::InvalidPixelRatio(self.device_pixel_ratio));
        }
        Ok(())
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Size of a backing store covering the viewport
    pub fn physical_size(&self) -> Size {
        self.size().scaled(self.device_pixel_ratio)
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(Viewport::new(800.0, 600.0, 2.0).is_ok());
        assert_eq!(
            Viewport::new(0.0, 600.0, 1.0),
            Err(PlatformError::InvalidViewport {
                width: 0.0,
                height: 600.0
            })
        );
        assert!(matches!(
            Viewport::new(800.0, 600.0, f32::NAN),
            Err(PlatformError::InvalidPixelRatio(_))
        ));
    }

    #[test]
    fn test_physical_size() {
        let viewport = Viewport::new(400.0, 300.0, 1.5).unwrap();
        assert_eq!(viewport.physical_size(), Size::new(600.0, 450.0));
    }
}
