pub mod character;
pub mod message;
pub mod story;

pub use character::*;
pub use message::*;
pub use story::*;
