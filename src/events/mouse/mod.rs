mod button;

pub use button::*;

use crate::Point;

/// Represents a mouse, or something else that can generate events *at canvas
/// positions* (like clicking, pressing, dragging...).
///
/// ### Creating instances
/// The `new` function can be used to construct `Mouse`s, but only the
/// *provider* should do this.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Mouse {
    id: u16,
}

impl Mouse {
    /// Constructs a new `Mouse` with the given `id`. Only the *provider* should
    /// use this function.
    pub fn new(id: u16) -> Self {
        Self { id }
    }

    /// Gets the numerical id of this `Mouse`.
    pub fn get_id(&self) -> u16 {
        self.id
    }
}

/// This event is for the `on_mouse_click` method of `Component`. It indicates
/// that the user pressed *and* released a mouse button at (roughly) the same
/// position.
///
/// The *provider* should fire it right after the corresponding
/// `MouseReleaseEvent`.
#[derive(Copy, Clone, Debug)]
pub struct MouseClickEvent {
    mouse: Mouse,
    point: Point,
    button: MouseButton,
}

impl MouseClickEvent {
    /// Constructs a new `MouseClickEvent` with the given mouse, mouse cursor
    /// position (point) and the given button
    pub fn new(mouse: Mouse, point: Point, button: MouseButton) -> Self {
        Self {
            mouse,
            point,
            button,
        }
    }

    /// Gets the `Mouse` that was clicked
    pub fn get_mouse(&self) -> Mouse {
        self.mouse
    }

    /// Gets the position of the mouse cursor on the canvas
    pub fn get_point(&self) -> Point {
        self.point
    }

    /// Gets the mouse button that was clicked
    pub fn get_button(&self) -> MouseButton {
        self.button
    }
}

/// This event is for the `on_mouse_press` method of `Component`. It indicates
/// that the user just pushed a mouse button down.
#[derive(Copy, Clone, Debug)]
pub struct MousePressEvent {
    mouse: Mouse,
    point: Point,
    button: MouseButton,
}

impl MousePressEvent {
    pub fn new(mouse: Mouse, point: Point, button: MouseButton) -> Self {
        Self {
            mouse,
            point,
            button,
        }
    }

    pub fn get_mouse(&self) -> Mouse {
        self.mouse
    }

    /// Gets the position where the mouse button was pressed
    pub fn get_point(&self) -> Point {
        self.point
    }

    pub fn get_button(&self) -> MouseButton {
        self.button
    }
}

/// This event is for the `on_mouse_drag` method of `Component`. It indicates
/// that the user moved the mouse cursor to `point` while holding at least one
/// mouse button down.
///
/// The event only knows where the mouse went *to*: components that need the
/// distance of the movement should remember the point of the previous press
/// or drag event.
#[derive(Copy, Clone, Debug)]
pub struct MouseDragEvent {
    mouse: Mouse,
    point: Point,
}

impl MouseDragEvent {
    pub fn new(mouse: Mouse, point: Point) -> Self {
        Self { mouse, point }
    }

    pub fn get_mouse(&self) -> Mouse {
        self.mouse
    }

    /// Gets the new position of the mouse cursor
    pub fn get_point(&self) -> Point {
        self.point
    }
}

/// This event is for the `on_mouse_release` method of `Component`. It
/// indicates that the user just released a mouse button.
#[derive(Copy, Clone, Debug)]
pub struct MouseReleaseEvent {
    mouse: Mouse,
    point: Point,
    button: MouseButton,
}

impl MouseReleaseEvent {
    pub fn new(mouse: Mouse, point: Point, button: MouseButton) -> Self {
        Self {
            mouse,
            point,
            button,
        }
    }

    pub fn get_mouse(&self) -> Mouse {
        self.mouse
    }

    /// Gets the position where the mouse button was released
    pub fn get_point(&self) -> Point {
        self.point
    }

    pub fn get_button(&self) -> MouseButton {
        self.button
    }
}
