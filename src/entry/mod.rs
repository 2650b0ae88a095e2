pub mod lie;
pub mod session;

pub use lie::*;
pub use session::*;
