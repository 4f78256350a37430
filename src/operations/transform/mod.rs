mod rotate;
mod scale;
mod translate;

pub use rotate::{rotate, rotate_point, rotate_shape};
pub use scale::{outline, scale};
pub use translate::translate;
