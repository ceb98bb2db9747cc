use crate::*;

/// The `Application` is the 'highest' object of this crate. It encapsulates
/// the root component and its buddy.
///
/// The application has methods to fire events to the component and to
/// render it. It is the responsibility of the *provider* to make
/// sure these methods are called when appropriate.
///
/// The application knows nothing about the *provider*: it doesn't even
/// know whether it is being controlled by a real user or an automatic
/// testing program.
///
/// This has the interesting implication that an application can be tested
/// with regular unit tests (using a `RecordingCanvas`), without needing any
/// kind of window.
pub struct Application {
    root_component: Box<dyn Component>,
    root_buddy: RootComponentBuddy,
}

impl Application {
    /// Creates a new `Application` and attaches `root_component` to it.
    ///
    /// The size of the `canvas` is queried once (right now) and given to the
    /// component through its buddy.
    pub fn new(mut root_component: Box<dyn Component>, canvas: &dyn Canvas) -> Self {
        let canvas_size = canvas.get_size();
        let mut root_buddy = RootComponentBuddy::new(canvas_size);
        root_component.on_attach(&mut root_buddy);
        log::info!(
            "Attached root component to a {}x{} canvas",
            canvas_size.get_width(),
            canvas_size.get_height()
        );
        Self {
            root_component,
            root_buddy,
        }
    }

    /// Gives the `Application` the opportunity to render its component, or
    /// even `force`s it to do so.
    ///
    /// ### Provider
    /// The *provider* should make sure that this method is called frequently
    /// (typically 60 times per second). If the canvas lost its previous pixels,
    /// `force` should be set to true to inform the application that it should
    /// really use this opportunity to render.
    ///
    /// ### Optional
    /// If `force` is false, rendering is truly optional: the component is only
    /// rendered if it requested so since the previous render.
    ///
    /// ### Return value
    /// This method returns `Ok(true)` if the application rendered and
    /// `Ok(false)` if it chose not to. If the canvas failed, the error is
    /// returned and the render request stays pending.
    pub fn render(&mut self, canvas: &mut dyn Canvas, force: bool) -> Result<bool, CanvasError> {
        if force || self.root_buddy.did_request_render() {
            log::trace!("Rendering root component (force = {})", force);

            // Clear before rendering so requests made during render survive
            self.root_buddy.clear_render_request();
            if let Err(error) = self.root_component.render(canvas, &mut self.root_buddy, force) {
                self.root_buddy.request_render();
                return Err(error);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn fire_mouse_click_event(&mut self, event: MouseClickEvent) {
        if self.root_buddy.get_subscriptions().mouse_click {
            self.root_component.on_mouse_click(event, &mut self.root_buddy);
        } else {
            log::trace!("Dropped {:?} because nobody subscribed to it", event);
        }
    }

    pub fn fire_mouse_press_event(&mut self, event: MousePressEvent) {
        if self.root_buddy.get_subscriptions().mouse_press {
            self.root_component.on_mouse_press(event, &mut self.root_buddy);
        } else {
            log::trace!("Dropped {:?} because nobody subscribed to it", event);
        }
    }

    pub fn fire_mouse_drag_event(&mut self, event: MouseDragEvent) {
        if self.root_buddy.get_subscriptions().mouse_drag {
            self.root_component.on_mouse_drag(event, &mut self.root_buddy);
        } else {
            log::trace!("Dropped {:?} because nobody subscribed to it", event);
        }
    }

    pub fn fire_mouse_release_event(&mut self, event: MouseReleaseEvent) {
        if self.root_buddy.get_subscriptions().mouse_release {
            self.root_component.on_mouse_release(event, &mut self.root_buddy);
        } else {
            log::trace!("Dropped {:?} because nobody subscribed to it", event);
        }
    }
}

impl Drop for Application {
    fn drop(&mut self) {
        self.root_component.on_detach();
        log::info!("Detached root component");
    }
}
