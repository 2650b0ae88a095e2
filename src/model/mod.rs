pub mod hole;
pub mod round;
pub mod shot;

pub use hole::*;
pub use round::*;
pub use shot::*;
