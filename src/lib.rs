pub mod consts;
pub mod error;
pub mod frame;
pub mod hex;
pub mod pattern;
pub mod pixel;
pub mod preview;

pub use error::{Error, Result};
pub use frame::Frame;
pub use pattern::Pattern;
