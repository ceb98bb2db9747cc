use crate::*;

use thiserror::Error;

mod recording;

pub use recording::*;

/// The errors that can occur while a `Canvas` is being used.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CanvasError {
    #[error("invalid canvas size {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
    #[error("drawing failed: {0}")]
    DrawFailed(String),
}

/// The width and height of a `Canvas`, in canvas units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasSize {
    width: f32,
    height: f32,
}

impl CanvasSize {
    /// Constructs a new `CanvasSize`. Both `width` and `height` must be finite and positive.
    pub fn new(width: f32, height: f32) -> Result<Self, CanvasError> {
        let is_valid = |value: f32| value.is_finite() && value > 0.0;
        if is_valid(width) && is_valid(height) {
            Ok(Self { width, height })
        } else {
            Err(CanvasError::InvalidSize { width, height })
        }
    }

    pub fn get_width(&self) -> f32 {
        self.width
    }

    pub fn get_height(&self) -> f32 {
        self.height
    }
}

/// The drawing surface that the *provider* (the windowing system or a test) hands to the
/// `Application`. The `Application` queries the size of the canvas once, when it is constructed,
/// and draws onto it during every `render` call.
///
/// The coordinate system of the canvas is described in the documentation of `Point`.
pub trait Canvas {
    fn get_size(&self) -> CanvasSize;

    /// Fills the entire canvas with the given `color`
    fn clear(&mut self, color: Color) -> Result<(), CanvasError>;

    /// Fills the axis-aligned rectangle whose top-left corner is `position` with the given
    /// `color`. Parts of the rectangle that are outside the canvas should simply not be drawn.
    fn fill_rect(
        &mut self,
        position: Point,
        width: f32,
        height: f32,
        color: Color,
    ) -> Result<(), CanvasError>;
}
