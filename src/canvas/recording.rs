use crate::*;

/// A single drawing operation that was performed on a `RecordingCanvas`.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect {
        position: Point,
        width: f32,
        height: f32,
        color: Color,
    },
}

/// A headless `Canvas` that doesn't draw anything, but remembers every drawing operation instead.
///
/// This makes it possible to test components and applications with regular unit tests, without
/// needing any kind of window. It can also be used by providers that want to inspect the output
/// of the application rather than showing it.
pub struct RecordingCanvas {
    size: CanvasSize,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Constructs a new `RecordingCanvas` with the given size. This fails if the width or height
    /// is not positive.
    pub fn new(width: f32, height: f32) -> Result<Self, CanvasError> {
        Ok(Self {
            size: CanvasSize::new(width, height)?,
            commands: Vec::new(),
        })
    }

    /// Gets all drawing operations that were recorded since the last call to `take_commands`
    pub fn get_commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Removes and returns all recorded drawing operations
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn get_size(&self) -> CanvasSize {
        self.size
    }

    fn clear(&mut self, color: Color) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::Clear(color));
        Ok(())
    }

    fn fill_rect(
        &mut self,
        position: Point,
        width: f32,
        height: f32,
        color: Color,
    ) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::FillRect {
            position,
            width,
            height,
            color,
        });
        Ok(())
    }
}
