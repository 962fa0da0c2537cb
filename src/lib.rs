mod collections;
mod error;

pub use collections::{Stack, DEFAULT_CAPACITY};
pub use error::{Error, Overflow};
