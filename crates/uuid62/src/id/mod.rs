mod be_bytes;
mod interface;
mod text;
mod uuid62;

pub use be_bytes::*;
pub use interface::*;
pub use text::*;
pub use uuid62::*;
