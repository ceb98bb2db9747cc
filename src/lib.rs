mod application;
mod canvas;
mod color;
mod component;
mod components;
mod events;
mod point;
mod random;
mod shape;

pub use application::*;
pub use canvas::*;
pub use color::*;
pub use component::*;
pub use components::*;
pub use events::*;
pub use point::*;
pub use random::*;
pub use shape::*;
