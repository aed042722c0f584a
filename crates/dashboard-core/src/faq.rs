//! FAQ entries and disclosure state

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Expansion state of a disclosure list.
///
/// Items open and close independently; any number may be open at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: Vec<bool>,
}

impl Disclosure {
    /// All `len` items start collapsed
    pub fn new(len: usize) -> Self {
        Self { open: vec![false; len] }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Flip one item; out-of-range indices are ignored
    pub fn toggle(&mut self, index: usize) {
        if let Some(slot) = self.open.get_mut(index) {
            *slot = !*slot;
        }
    }

    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|o| **o).count()
    }
}
