//! Fixed sample datasets
//!
//! The data are `'static` and never mutated; every accessor hands out a
//! fresh borrowed view.

const NAMES: &[&str] = &[
    "Emma", "William", "James", "Sophia", "Lucas", "Sophia", "James",
];

const NUMBERS: &[i32] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

const NESTED_NAMES: &[&[&str]] = &[&["Emma", "William"], &["James", "Sophia"]];

/// Read-only access to the sample sequences
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceSource;

impl SequenceSource {
    pub fn new() -> Self {
        Self
    }

    /// Names in declaration order; may contain duplicates
    pub fn names(&self) -> impl Iterator<Item = &'static str> + Clone {
        NAMES.iter().copied()
    }

    /// The integers 1 through 10
    pub fn numbers(&self) -> impl Iterator<Item = i32> + Clone {
        NUMBERS.iter().copied()
    }

    /// Two groups of names, used to demonstrate flattening
    pub fn nested_names(&self) -> impl Iterator<Item = &'static [&'static str]> + Clone {
        NESTED_NAMES.iter().copied()
    }
}
