/// An opaque RGB color with one byte per channel.
///
/// Because every channel is a `u8`, channel values can never leave the range [0, 255]. Methods
/// that adjust a channel saturate at those bounds instead of wrapping around.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    pub const PURE_BLUE: Color = Color::rgb(0, 0, 255);
    pub const PURE_GREEN: Color = Color::rgb(0, 255, 0);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn get_red_int(&self) -> u8 {
        self.red
    }

    pub fn get_green_int(&self) -> u8 {
        self.green
    }

    pub fn get_blue_int(&self) -> u8 {
        self.blue
    }

    /// Moves this color `step` units along the blue-to-green gradient: the green channel is
    /// increased by `step` and the blue channel is decreased by `step`, both saturating. The red
    /// channel of the result is always 0.
    ///
    /// Once the result is `PURE_GREEN`, shifting it again has no effect.
    pub fn shifted_towards_green(&self, step: u8) -> Self {
        Self::rgb(0, self.green.saturating_add(step), self.blue.saturating_sub(step))
    }
}

#[cfg(test)]
mod tests {

    use super::Color;

    #[test]
    fn test_shift_towards_green() {
        assert_eq!(Color::rgb(0, 20, 235), Color::PURE_BLUE.shifted_towards_green(20));
        assert_eq!(Color::rgb(0, 120, 135), Color::rgb(0, 100, 155).shifted_towards_green(20));

        // Both channels saturate instead of wrapping around
        assert_eq!(Color::rgb(0, 255, 0), Color::rgb(0, 240, 15).shifted_towards_green(20));
        assert_eq!(Color::PURE_GREEN, Color::PURE_GREEN.shifted_towards_green(20));
    }

    #[test]
    fn test_shift_drops_red() {
        assert_eq!(Color::rgb(0, 30, 80), Color::rgb(200, 10, 100).shifted_towards_green(20));
    }
}
