//! The navigation outline.
//!
//! A documentation site's sidebar is an ordered tree of entries. Each entry
//! has display text, a [`LinkTarget`], and zero or more nested entries.
//! Large subtrees (class lists, file lists) are not stored inline: the
//! generator splits them into sibling data files and the parent entry refers
//! to them by identifier. [`Children`] models both shapes.

#[cfg(not(test))]
use alloc::string::String;
#[cfg(not(test))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::link::LinkTarget;

/// One sidebar entry: display text, a hyperlink target, and the entries
/// nested beneath it.
///
/// Ownership makes the outline a finite, acyclic, ordered tree: a node
/// cannot appear as its own descendant, and child order matches document
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeNode {
    /// Display text shown in the sidebar.
    pub label: String,
    /// Where the entry points, if anywhere.
    pub link: LinkTarget,
    /// Entries nested beneath this one.
    pub children: Children,
}

impl TreeNode {
    /// Create an entry with an explicit link target and no children.
    pub fn new(label: impl Into<String>, link: LinkTarget) -> Self {
        TreeNode {
            label: label.into(),
            link,
            children: Children::None,
        }
    }

    /// Create an entry linking to a page.
    pub fn page(label: impl Into<String>, url: impl Into<String>) -> Self {
        TreeNode::new(label, LinkTarget::page(url))
    }

    /// Create an entry linking to a named anchor within a page.
    pub fn anchor(
        label: impl Into<String>,
        page: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Self {
        TreeNode::new(label, LinkTarget::anchor(page, fragment))
    }

    /// Create a non-clickable grouping header.
    pub fn group(label: impl Into<String>) -> Self {
        TreeNode::new(label, LinkTarget::None)
    }

    /// Set an inline subtree, in document order.
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = Children::Inline(children);
        self
    }

    /// Refer to a subtree stored in a sibling data file.
    pub fn with_external_children(mut self, identifier: impl Into<String>) -> Self {
        self.children = Children::External(identifier.into());
        self
    }

    /// Returns true if the entry has no subtree at all.
    pub fn is_leaf(&self) -> bool {
        matches!(self.children, Children::None)
    }
}

/// The shapes an entry's subtree can take in the generated payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Children {
    /// Leaf entry: no subtree. Appears as null on the wire.
    #[default]
    None,
    /// Identifier of a subtree stored in a sibling data file,
    /// e.g. `annotated_dup`.
    External(String),
    /// Subtree stored inline, in document order.
    Inline(Vec<TreeNode>),
}

impl Children {
    /// Returns true for a leaf entry.
    pub fn is_none(&self) -> bool {
        matches!(self, Children::None)
    }

    /// The inline subtree, if the children are stored inline.
    pub fn as_inline(&self) -> Option<&[TreeNode]> {
        match self {
            Children::Inline(nodes) => Some(nodes),
            _ => None,
        }
    }

    /// The identifier of the externally stored subtree, if any.
    pub fn as_external(&self) -> Option<&str> {
        match self {
            Children::External(identifier) => Some(identifier),
            _ => None,
        }
    }
}
