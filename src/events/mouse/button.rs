/// Represents one of the buttons of a `Mouse`, for instance the primary button.
///
/// Every mouse event carries the button that caused it. Every `Mouse` has a *primary* button
/// (index 0) and 0 or more additional buttons, which can be distinguished with `get_index`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MouseButton {
    index: u8,
}

impl MouseButton {
    /// Constructs a new `MouseButton` with the given `index`. This function
    /// should normally only be used by the *provider*.
    pub const fn new(index: u8) -> Self {
        Self { index }
    }

    /// Constructs an instance of `MouseButton` that represents the *primary*
    /// button of a `Mouse`.
    pub const fn primary() -> Self {
        Self { index: 0 }
    }

    /// Gets the numerical index of this mouse button.
    ///
    /// This will always be 0 for the primary button, and some other value for
    /// the other buttons.
    ///
    /// # Index conventions
    /// - 0 (primary) is the left mouse button (or the finger on touch screens)
    /// - 1 is the right mouse button
    /// - 2 is the mouse wheel button
    /// - 3 and higher are macro buttons
    pub fn get_index(&self) -> u8 {
        self.index
    }
}
