use crate::*;

/// The width and height of the box, in canvas units
pub const BOX_SIZE: f32 = 50.0;

/// How much the green channel grows (and the blue channel shrinks) for every
/// click outside the box
pub const COLOR_STEP: u8 = 20;

/// The color of the box right after it is created, clicked, or grabbed
pub const BASE_COLOR: Color = Color::PURE_BLUE;

/// The color the canvas is cleared to before the box is drawn
pub const BACKGROUND_COLOR: Color = Color::rgb(255, 255, 255);

/// A component that displays a pure blue, draggable box in the center of the
/// canvas.
///
/// The box 'runs away': it jumps to a random location within the canvas every
/// time the user clicks on it. When the user clicks outside the box, it becomes
/// a bit greener instead, until it is pure green. Clicking or grabbing the box
/// makes it blue again.
///
/// Dragging is not clamped: the user can drag the box (partially) outside the
/// canvas. Only the random jumps are guaranteed to keep the box on the canvas.
pub struct RunningBoxComponent {
    random: Box<dyn RandomSource>,

    // Positioned in on_attach
    shape: FilledRect,

    grabbed: bool,
    last_point: Option<Point>,
}

impl RunningBoxComponent {
    /// Constructs a new `RunningBoxComponent` that uses a time-seeded
    /// `XorShiftRandom` to choose its new locations.
    pub fn new() -> Self {
        Self::with_random_source(Box::new(XorShiftRandom::from_time()))
    }

    /// Constructs a new `RunningBoxComponent` that uses the given `random`
    /// source to choose its new locations.
    pub fn with_random_source(random: Box<dyn RandomSource>) -> Self {
        Self {
            random,
            shape: FilledRect::new(Point::new(0.0, 0.0), BOX_SIZE, BOX_SIZE, BASE_COLOR),
            grabbed: false,
            last_point: None,
        }
    }

    /// Gets the current state of the box
    pub fn get_box(&self) -> &FilledRect {
        &self.shape
    }

    /// Checks whether the user is currently holding the box
    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// Picks a random position for the top-left corner of the box such that the
    /// entire box stays within the canvas.
    fn random_position(&mut self, canvas_size: CanvasSize) -> Point {
        // If the canvas is smaller than the box, the best we can do is the corner
        let range_x = (canvas_size.get_width() - self.shape.get_width()).max(0.0);
        let range_y = (canvas_size.get_height() - self.shape.get_height()).max(0.0);
        Point::new(self.random.next_f32() * range_x, self.random.next_f32() * range_y)
    }

    fn shift_color(&mut self) {
        let new_color = self.shape.get_color().shifted_towards_green(COLOR_STEP);
        log::debug!(
            "Shifting the box color to ({}, {}, {})",
            new_color.get_red_int(),
            new_color.get_green_int(),
            new_color.get_blue_int()
        );
        self.shape.set_color(new_color);
    }
}

impl Default for RunningBoxComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for RunningBoxComponent {
    fn on_attach(&mut self, buddy: &mut dyn ComponentBuddy) {
        let canvas_size = buddy.get_canvas_size();
        let center_x = (canvas_size.get_width() - self.shape.get_width()) / 2.0;
        let center_y = (canvas_size.get_height() - self.shape.get_height()) / 2.0;
        self.shape.move_to(Point::new(center_x, center_y));
        self.shape.set_color(BASE_COLOR);

        buddy.subscribe_mouse_click();
        buddy.subscribe_mouse_press();
        buddy.subscribe_mouse_drag();
        buddy.subscribe_mouse_release();
        buddy.request_render();
    }

    fn render(&mut self, canvas: &mut dyn Canvas, _buddy: &mut dyn ComponentBuddy, _force: bool) -> RenderResult {
        canvas.clear(BACKGROUND_COLOR)?;
        self.shape.apply_to(canvas)
    }

    fn on_mouse_click(&mut self, event: MouseClickEvent, buddy: &mut dyn ComponentBuddy) {
        let point = event.get_point();
        log::debug!(
            "Mouse {} clicked button {} at ({}, {})",
            event.get_mouse().get_id(),
            event.get_button().get_index(),
            point.get_x(),
            point.get_y()
        );

        if self.shape.contains(point) {
            let new_position = self.random_position(buddy.get_canvas_size());
            self.shape.move_to(new_position);
            self.shape.set_color(BASE_COLOR);
        } else {
            self.shift_color();
        }
        buddy.request_render();
    }

    fn on_mouse_press(&mut self, event: MousePressEvent, buddy: &mut dyn ComponentBuddy) {
        let point = event.get_point();
        log::debug!(
            "Mouse {} pressed button {} at ({}, {})",
            event.get_mouse().get_id(),
            event.get_button().get_index(),
            point.get_x(),
            point.get_y()
        );
        if self.shape.contains(point) {
            self.grabbed = true;
            self.shape.set_color(BASE_COLOR);
            buddy.request_render();
        }
        self.last_point = Some(point);
    }

    fn on_mouse_drag(&mut self, event: MouseDragEvent, buddy: &mut dyn ComponentBuddy) {
        let point = event.get_point();
        log::debug!(
            "Mouse {} dragged to ({}, {})",
            event.get_mouse().get_id(),
            point.get_x(),
            point.get_y()
        );

        // Without a previous press or drag, there is no distance to move
        if let Some(last_point) = self.last_point {
            if self.grabbed {
                self.shape.move_by(point - last_point);
                buddy.request_render();
            }
        }
        self.last_point = Some(point);
    }

    fn on_mouse_release(&mut self, event: MouseReleaseEvent, _buddy: &mut dyn ComponentBuddy) {
        log::debug!(
            "Mouse {} released button {}",
            event.get_mouse().get_id(),
            event.get_button().get_index()
        );
        self.grabbed = false;
    }
}
