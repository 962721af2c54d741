#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod base62;
mod error;
mod id;
#[cfg(feature = "serde")]
mod serde;

pub use crate::base62::*;
pub use crate::error::*;
pub use crate::id::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;

/// Re-exported so callers can name [`Uuid`] without depending on `uuid`
/// directly.
pub use uuid::Uuid;
