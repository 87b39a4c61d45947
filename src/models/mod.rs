mod pin;
mod upload;

pub use pin::*;
pub use upload::*;
