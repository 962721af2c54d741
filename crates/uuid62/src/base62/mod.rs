mod bit_io;
mod codec;
mod error;

pub use bit_io::*;
pub use codec::*;
pub use error::*;
