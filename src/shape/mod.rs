use crate::*;

/// An axis-aligned rectangle that is filled with a single color.
///
/// Unlike shapes in retained-mode drawing libraries, a `FilledRect` is just a value: changing it
/// doesn't change anything on the screen. Its owner must call `apply_to` (typically during
/// `render`) to draw the current state onto a `Canvas`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FilledRect {
    position: Point,
    width: f32,
    height: f32,
    color: Color,
}

impl FilledRect {
    /// Constructs a new `FilledRect` whose top-left corner is at `position`
    pub fn new(position: Point, width: f32, height: f32, color: Color) -> Self {
        Self {
            position,
            width,
            height,
            color,
        }
    }

    /// Gets the position of the top-left corner of this rectangle
    pub fn get_position(&self) -> Point {
        self.position
    }

    pub fn get_width(&self) -> f32 {
        self.width
    }

    pub fn get_height(&self) -> f32 {
        self.height
    }

    pub fn get_color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Moves the top-left corner of this rectangle to `position`
    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    /// Translates this rectangle by `delta`
    pub fn move_by(&mut self, delta: Point) {
        self.position = self.position + delta;
    }

    /// Checks if the given point is inside this rectangle. Points on the border are considered to
    /// be inside.
    pub fn contains(&self, point: Point) -> bool {
        let x = point.get_x();
        let y = point.get_y();
        let left = self.position.get_x();
        let top = self.position.get_y();
        x >= left && x <= left + self.width && y >= top && y <= top + self.height
    }

    /// Draws this rectangle onto the given `canvas`
    pub fn apply_to(&self, canvas: &mut dyn Canvas) -> Result<(), CanvasError> {
        canvas.fill_rect(self.position, self.width, self.height, self.color)
    }
}

#[cfg(test)]
mod tests {

    use crate::*;

    #[test]
    fn test_contains() {
        let rect = FilledRect::new(Point::new(10.0, 20.0), 50.0, 30.0, Color::PURE_BLUE);

        // Boundary cases
        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(rect.contains(Point::new(60.0, 50.0)));
        assert!(!rect.contains(Point::new(9.9, 30.0)));
        assert!(!rect.contains(Point::new(30.0, 50.1)));

        // Simpler cases
        assert!(rect.contains(Point::new(35.0, 35.0)));
        assert!(!rect.contains(Point::new(-100.0, 300.0)));
    }

    #[test]
    fn test_move() {
        let mut rect = FilledRect::new(Point::new(10.0, 20.0), 50.0, 50.0, Color::PURE_BLUE);

        rect.move_by(Point::new(5.0, -25.0));
        assert_eq!(Point::new(15.0, -5.0), rect.get_position());
        assert!(rect.contains(Point::new(15.0, 0.0)));
        assert!(!rect.contains(Point::new(12.0, 0.0)));

        rect.move_to(Point::new(100.0, 100.0));
        assert_eq!(Point::new(100.0, 100.0), rect.get_position());

        // Moving should never change the size or color
        assert_eq!(50.0, rect.get_width());
        assert_eq!(50.0, rect.get_height());
        assert_eq!(Color::PURE_BLUE, rect.get_color());
    }

    #[test]
    fn test_apply_to() {
        let mut canvas = RecordingCanvas::new(100.0, 100.0).unwrap();
        let mut rect = FilledRect::new(Point::new(1.0, 2.0), 3.0, 4.0, Color::PURE_BLUE);
        rect.set_color(Color::PURE_GREEN);
        rect.apply_to(&mut canvas).unwrap();

        assert_eq!(
            vec![DrawCommand::FillRect {
                position: Point::new(1.0, 2.0),
                width: 3.0,
                height: 4.0,
                color: Color::PURE_GREEN,
            }],
            canvas.take_commands()
        );
    }
}
