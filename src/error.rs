#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("stack grew too large (capacity: {capacity})")]
    Overflow { capacity: usize },
    #[error("expected element on stack")]
    Empty,
    #[error("expected {expected} elements on stack, found {len}")]
    Underflow { expected: usize, len: usize },
}

/// A push that was rejected because the stack was full. Carries the rejected value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("stack grew too large (capacity: {capacity})")]
pub struct Overflow<T> {
    pub capacity: usize,
    pub value: T,
}

impl<T> Overflow<T> {
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<Overflow<T>> for Error {
    fn from(e: Overflow<T>) -> Self {
        Error::Overflow {
            capacity: e.capacity,
        }
    }
}
