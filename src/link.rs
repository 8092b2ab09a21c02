//! Hyperlink targets for navigation entries.
//!
//! The generator emits each entry's link as a raw string: a page URL
//! (`annotated.html`), a page URL with a named anchor
//! (`index.html#intro_sec`), or nothing at all when the entry is a pure
//! grouping header. [`LinkTarget`] keeps those three cases apart so a viewer
//! can tell clickable entries from headers without sniffing strings.

#[cfg(not(test))]
use alloc::format;
#[cfg(not(test))]
use alloc::string::String;

/// Error that occurs when parsing a raw link string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// The raw link string was empty.
    Empty,
    /// The raw link string contains whitespace.
    EmbeddedWhitespace,
    /// An anchor link with an empty page, an empty fragment, or more than
    /// one `#`.
    MalformedAnchor,
}

impl core::fmt::Display for LinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinkError::Empty => write!(f, "link is empty"),
            LinkError::EmbeddedWhitespace => write!(f, "link contains whitespace"),
            LinkError::MalformedAnchor => write!(f, "malformed anchor link"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinkError {}

/// Where a navigation entry points.
///
/// Grouping headers carry no link at all; modeling that as a variant rather
/// than an empty string makes non-clickable entries unrepresentable by
/// accident.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LinkTarget {
    /// A documentation page, e.g. `annotated.html`.
    Page(String),
    /// A named anchor within a page, e.g. `index.html#intro_sec`.
    Anchor {
        /// The page holding the anchor.
        page: String,
        /// The fragment identifier after `#`.
        fragment: String,
    },
    /// No link: the entry is a pure grouping header.
    #[default]
    None,
}

impl LinkTarget {
    /// Create a page link.
    pub fn page(url: impl Into<String>) -> Self {
        LinkTarget::Page(url.into())
    }

    /// Create an anchor link into a page.
    pub fn anchor(page: impl Into<String>, fragment: impl Into<String>) -> Self {
        LinkTarget::Anchor {
            page: page.into(),
            fragment: fragment.into(),
        }
    }

    /// Parse a raw link string as emitted by the generator.
    ///
    /// A string without `#` is a [`Page`](LinkTarget::Page); a string of the
    /// form `page#fragment` is an [`Anchor`](LinkTarget::Anchor). The empty
    /// string is rejected rather than treated as a grouping header, since
    /// the generator encodes "no link" out of band (as null), not as `""`.
    pub fn parse(raw: &str) -> Result<Self, LinkError> {
        if raw.is_empty() {
            return Err(LinkError::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(LinkError::EmbeddedWhitespace);
        }
        match raw.split_once('#') {
            None => Ok(LinkTarget::page(raw)),
            Some((page, fragment)) => {
                if page.is_empty() || fragment.is_empty() || fragment.contains('#') {
                    return Err(LinkError::MalformedAnchor);
                }
                Ok(LinkTarget::anchor(page, fragment))
            }
        }
    }

    /// Returns true if following this link navigates somewhere.
    pub fn is_clickable(&self) -> bool {
        !matches!(self, LinkTarget::None)
    }

    /// Returns true if the entry is a pure grouping header.
    pub fn is_none(&self) -> bool {
        matches!(self, LinkTarget::None)
    }

    /// The page this link lands on, if any.
    pub fn page_url(&self) -> Option<&str> {
        match self {
            LinkTarget::Page(url) => Some(url),
            LinkTarget::Anchor { page, .. } => Some(page),
            LinkTarget::None => None,
        }
    }

    /// The fragment identifier, for anchor links.
    pub fn fragment(&self) -> Option<&str> {
        match self {
            LinkTarget::Anchor { fragment, .. } => Some(fragment),
            _ => None,
        }
    }

    /// Reassemble the raw href string, or `None` for grouping headers.
    pub fn href(&self) -> Option<String> {
        match self {
            LinkTarget::Page(url) => Some(url.clone()),
            LinkTarget::Anchor { page, fragment } => Some(format!("{page}#{fragment}")),
            LinkTarget::None => None,
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::LinkTarget;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[cfg(not(test))]
    use alloc::string::String;

    // On the wire a link is the raw href string or null, never an enum tag.
    impl Serialize for LinkTarget {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self.href() {
                Some(href) => serializer.serialize_some(&href),
                None => serializer.serialize_none(),
            }
        }
    }

    impl<'de> Deserialize<'de> for LinkTarget {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => LinkTarget::parse(&raw).map_err(D::Error::custom),
                None => Ok(LinkTarget::None),
            }
        }
    }
}
