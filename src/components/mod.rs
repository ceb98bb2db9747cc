mod running_box;

pub use running_box::*;
