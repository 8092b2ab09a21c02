//! # Navtree
//!
//! Navigation-tree data model for generated documentation sites.
//!
//! A documentation generator emits one static navigation payload per site:
//! a hierarchical outline of sections rendered as a collapsible sidebar, a
//! flat identifier index the viewer uses to keep the sidebar in step with
//! the page being displayed, and the two tooltip strings for the
//! panel-synchronisation toggle. This crate models that payload as typed,
//! immutable data. Rendering, traversal, and the synchronisation behavior
//! itself belong to the viewer, not to this crate.
//!
//! ## Module Organization
//!
//! - [`link`] - Hyperlink targets: pages, intra-page anchors, grouping headers
//! - [`tree`] - The navigation outline
//! - [`index`] - Flat identifier lookup sequence
//! - [`sync`] - Panel-synchronisation tooltip strings
//! - [`payload`] - The complete payload and its read accessors
//! - [`data`] - The generated WIC SDK instance
//!
//! ## Quick Start
//!
//! ```
//! use navtree::{wic_sdk, LinkTarget};
//!
//! let nav = wic_sdk();
//!
//! // The outline root is the project itself.
//! assert_eq!(nav.tree().label, "WIC SDK");
//! assert_eq!(nav.tree().link, LinkTarget::page("index.html"));
//!
//! // The index correlates displayed pages with outline positions.
//! assert_eq!(nav.index().len(), 2);
//! ```
//!
//! ## Features
//!
//! - `std` (default) - Enables the cached [`wic_sdk_static`] accessor
//! - `serde` - Serialize/deserialize the payload in the generator's wire
//!   shape (links as string-or-null, subtrees as array, identifier string,
//!   or null)

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

// =============================================================================
// Core modules
// =============================================================================

/// Hyperlink targets for navigation entries.
pub mod link;

/// The navigation outline.
pub mod tree;

/// Flat identifier lookup sequence.
pub mod index;

/// Panel-synchronisation tooltip strings.
pub mod sync;

/// The complete navigation payload.
pub mod payload;

/// The generated WIC SDK instance.
pub mod data;

// =============================================================================
// Public re-exports (convenience)
// =============================================================================

pub use data::wic_sdk;
#[cfg(feature = "std")]
pub use data::wic_sdk_static;
pub use index::NavIndex;
pub use link::{LinkError, LinkTarget};
pub use payload::NavTreeData;
pub use sync::SyncMessages;
pub use tree::{Children, TreeNode};
