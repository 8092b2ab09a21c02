//! The complete navigation payload.
//!
//! One payload is emitted per documentation site and read any number of
//! times by the viewer. All accessors are infallible reads returning the
//! same value on every call; there is no mutation API.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::index::NavIndex;
use crate::sync::SyncMessages;
use crate::tree::TreeNode;

/// A site's navigation payload: the outline, the lookup index, and the
/// synchronisation tooltips.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavTreeData {
    tree: TreeNode,
    index: NavIndex,
    sync_messages: SyncMessages,
}

impl NavTreeData {
    /// Assemble a payload from its three parts.
    pub fn new(tree: TreeNode, index: NavIndex, sync_messages: SyncMessages) -> Self {
        NavTreeData {
            tree,
            index,
            sync_messages,
        }
    }

    /// The root of the navigation outline.
    pub fn tree(&self) -> &TreeNode {
        &self.tree
    }

    /// The flat identifier lookup sequence.
    pub fn index(&self) -> &NavIndex {
        &self.index
    }

    /// The panel-synchronisation tooltip strings.
    pub fn sync_messages(&self) -> &SyncMessages {
        &self.sync_messages
    }
}
