use std::fmt::{Display, Formatter};

/// A 1-based position in a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub usize);

impl Position {
    /// The position of the element stored at `index` in a slice.
    pub fn of_index(index: usize) -> Self {
        Self(index + 1)
    }

    pub fn index(self) -> usize {
        self.0 - 1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
