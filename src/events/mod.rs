mod mouse;

pub use mouse::*;
