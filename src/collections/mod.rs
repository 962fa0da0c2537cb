mod stack;

pub use stack::{Stack, DEFAULT_CAPACITY};
