use crate::*;

/// The `ComponentBuddy` of the root component of an `Application`.
pub struct RootComponentBuddy {
    subscriptions: ComponentSubscriptions,
    canvas_size: CanvasSize,

    requested_render: bool,
}

impl RootComponentBuddy {
    pub fn new(canvas_size: CanvasSize) -> Self {
        Self {
            subscriptions: ComponentSubscriptions::new(),
            canvas_size,

            // Components should normally render as soon as possible after they
            // are attached
            requested_render: true,
        }
    }

    pub fn get_subscriptions(&self) -> &ComponentSubscriptions {
        &self.subscriptions
    }

    pub fn did_request_render(&self) -> bool {
        self.requested_render
    }

    pub fn clear_render_request(&mut self) {
        self.requested_render = false;
    }
}

impl ComponentBuddy for RootComponentBuddy {
    fn request_render(&mut self) {
        self.requested_render = true;
    }

    fn get_canvas_size(&self) -> CanvasSize {
        self.canvas_size
    }

    fn subscribe_mouse_click(&mut self) {
        self.subscriptions.mouse_click = true;
    }

    fn unsubscribe_mouse_click(&mut self) {
        self.subscriptions.mouse_click = false;
    }

    fn subscribe_mouse_press(&mut self) {
        self.subscriptions.mouse_press = true;
    }

    fn unsubscribe_mouse_press(&mut self) {
        self.subscriptions.mouse_press = false;
    }

    fn subscribe_mouse_drag(&mut self) {
        self.subscriptions.mouse_drag = true;
    }

    fn unsubscribe_mouse_drag(&mut self) {
        self.subscriptions.mouse_drag = false;
    }

    fn subscribe_mouse_release(&mut self) {
        self.subscriptions.mouse_release = true;
    }

    fn unsubscribe_mouse_release(&mut self) {
        self.subscriptions.mouse_release = false;
    }
}
