//! Panel-synchronisation tooltip strings.
//!
//! The viewer shows a toggle that keeps the sidebar and the content panel in
//! step. The payload carries the two tooltip strings for that toggle; the
//! toggle's behavior itself lives entirely in the viewer.

#[cfg(not(test))]
use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tooltip shown while synchronisation is off.
pub const DEFAULT_ENABLE_MSG: &str = "click to enable panel synchronisation";

/// Tooltip shown while synchronisation is on.
pub const DEFAULT_DISABLE_MSG: &str = "click to disable panel synchronisation";

/// The two tooltip strings for the panel-synchronisation toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SyncMessages {
    /// Shown while synchronisation is off; clicking turns it on.
    pub enable: String,
    /// Shown while synchronisation is on; clicking turns it off.
    pub disable: String,
}

impl SyncMessages {
    /// Create messages with explicit tooltip text.
    pub fn new(enable: impl Into<String>, disable: impl Into<String>) -> Self {
        SyncMessages {
            enable: enable.into(),
            disable: disable.into(),
        }
    }
}

impl Default for SyncMessages {
    fn default() -> Self {
        SyncMessages::new(DEFAULT_ENABLE_MSG, DEFAULT_DISABLE_MSG)
    }
}
