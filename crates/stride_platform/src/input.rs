//! Input event types for pointer and scroll

/// Input events
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved; either coordinate may be unavailable
    PointerMoved {
        /// X position in viewport coordinates
        x: Option<f32>,
        /// Y position in viewport coordinates
        y: Option<f32>,
    },
    /// Page scrolled
    Scroll {
        /// Vertical page offset in pixels
        offset: f32,
    },
}

impl InputEvent {
    /// Pointer move with both coordinates known
    pub fn pointer(x: f32, y: f32) -> Self {
        InputEvent::PointerMoved {
            x: Some(x),
            y: Some(y),
        }
    }
}
