#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ComponentSubscriptions {
    // Mouse event subscriptions
    pub mouse_click: bool,
    pub mouse_press: bool,
    pub mouse_drag: bool,
    pub mouse_release: bool,
}

impl ComponentSubscriptions {
    pub fn new() -> Self {
        Self::default()
    }
}
