use crate::*;

mod buddy;

pub use buddy::*;

/// The result of `Component::render`. Rendering only fails when the `Canvas`
/// fails.
pub type RenderResult = Result<(), CanvasError>;

/// The core trait of this crate. `Component`s are event handlers for mouse
/// events, but most importantly render events to draw themselves on a `Canvas`.
///
/// Components don't extend any framework type: the *provider* drives an
/// `Application`, and the application calls the methods of this trait on its
/// root component. The component uses the `ComponentBuddy` that is passed to
/// every method to talk back (subscribing to events, requesting renders...).
pub trait Component {
    /// Called exactly once, right after the component is given to an
    /// `Application`. This is the place to set up the initial state and to
    /// subscribe to events.
    fn on_attach(&mut self, buddy: &mut dyn ComponentBuddy);

    /// Lets this component draw itself onto the given `canvas`.
    ///
    /// # When this method will be called
    /// This method will only be called if the component asked for it via the
    /// `request_render` method of its buddy, or the provider determined that
    /// it was necessary (for instance, the window lost its pixels). In the
    /// latter case, `force` will be true.
    ///
    /// The component should always draw its complete current state: it
    /// shouldn't assume that anything from a previous call is still visible.
    fn render(&mut self, canvas: &mut dyn Canvas, buddy: &mut dyn ComponentBuddy, force: bool) -> RenderResult;

    fn on_mouse_click(&mut self, _event: MouseClickEvent, _buddy: &mut dyn ComponentBuddy) {
        forgot("MouseClick")
    }

    fn on_mouse_press(&mut self, _event: MousePressEvent, _buddy: &mut dyn ComponentBuddy) {
        forgot("MousePress")
    }

    fn on_mouse_drag(&mut self, _event: MouseDragEvent, _buddy: &mut dyn ComponentBuddy) {
        forgot("MouseDrag")
    }

    fn on_mouse_release(&mut self, _event: MouseReleaseEvent, _buddy: &mut dyn ComponentBuddy) {
        forgot("MouseRelease")
    }

    fn on_detach(&mut self) {
        // Components don't register for this event explicitly and many events
        // won't need to implement this, so no need for a panic
    }
}

fn forgot(event_name: &'static str) -> ! {
    panic!(
        "This component registered itself for the {}Event,
    but didn't implement the event handler for it",
        event_name
    )
}
