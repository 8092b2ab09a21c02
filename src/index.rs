//! Flat identifier lookup sequence.
//!
//! Alongside the outline, the generator emits a flat ordered list of page
//! and anchor identifiers. The viewer scans it to correlate the page
//! currently displayed with its position in the outline when panel
//! synchronisation is on. Entries are opaque: nothing here enforces that an
//! identifier has a counterpart in the tree (a dangling identifier is an
//! authoring defect in the generated data, not a runtime error).

#[cfg(not(test))]
use alloc::string::String;
#[cfg(not(test))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flat ordered sequence of page/anchor identifiers.
///
/// Order is significant and stable: re-reading the index any number of
/// times yields the same entries in the same positions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct NavIndex {
    entries: Vec<String>,
}

impl NavIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        NavIndex::default()
    }

    /// Create an index from identifier strings, preserving order.
    pub fn from_entries(entries: Vec<String>) -> Self {
        NavIndex { entries }
    }

    /// Number of identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index has no identifiers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The identifier at `position`, if in bounds.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.entries.get(position).map(String::as_str)
    }

    /// Iterate over the identifiers in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// The identifiers as a slice, in order.
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

impl FromIterator<String> for NavIndex {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        NavIndex {
            entries: iter.into_iter().collect(),
        }
    }
}
