use crate::*;

mod root;
mod subscriptions;

pub use root::*;
pub use subscriptions::*;

/// Every `Component` will be assigned a *buddy*. This buddy will be passed as
/// parameter to every method of the `Component` trait. The buddy is the primary
/// way the component can interact with the `Application` that owns it.
///
/// The subscribe methods can be used to subscribe the component for certain
/// *events* (for instance `MouseClickEvent` and `MouseDragEvent`). *Until the
/// component calls the corresponding subscribe method, its event handling
/// methods will not be called.* Exceptions are made for the `on_attach` and
/// `on_detach` methods that will always be called. For each subscribe method,
/// there is also an unsubscribe method to cancel the event listen subscription.
pub trait ComponentBuddy {
    /// Requests to re-render this component (by calling its render method)
    /// during the next frame.
    ///
    /// Note that this component might be re-rendered even if this method is
    /// not called, for instance when the window lost its pixels.
    fn request_render(&mut self);

    /// Gets the size of the canvas the component is drawn on. The size is
    /// determined once, when the `Application` is created, and never changes
    /// afterwards.
    fn get_canvas_size(&self) -> CanvasSize;

    // Subscribe methods

    /// Subscribes the component for the `MouseClickEvent`
    fn subscribe_mouse_click(&mut self);

    /// Cancels the components subscription for the `MouseClickEvent`
    fn unsubscribe_mouse_click(&mut self);

    /// Subscribes the component for the `MousePressEvent`
    fn subscribe_mouse_press(&mut self);

    /// Cancels the components subscription for the `MousePressEvent`
    fn unsubscribe_mouse_press(&mut self);

    /// Subscribes the component for the `MouseDragEvent`
    fn subscribe_mouse_drag(&mut self);

    /// Cancels the components subscription for the `MouseDragEvent`
    fn unsubscribe_mouse_drag(&mut self);

    /// Subscribes the component for the `MouseReleaseEvent`
    fn subscribe_mouse_release(&mut self);

    /// Cancels the components subscription for the `MouseReleaseEvent`
    fn unsubscribe_mouse_release(&mut self);
}
