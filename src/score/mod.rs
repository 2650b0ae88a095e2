pub mod export;
pub mod sort_utils;
pub mod stats;

pub use export::*;
pub use sort_utils::*;
pub use stats::*;
