//! Layout slide caps.
//!
//! Each playlist layout requires an exact number of slides. The mapping is a
//! plain table so a new layout is one more entry, usually in configuration:
//!
//! ```toml
//! [[layouts]]
//! id = 2
//! slides = 4
//! ```

use marquee_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

/// Slide count required by a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum LayoutCap {
    /// The layout needs exactly this many slides; more are never kept.
    #[display("{} slides", _0)]
    Exact(NonZeroUsize),
    /// No cap applies.
    #[display("unbounded")]
    Unbounded,
}

impl LayoutCap {
    /// Cap for an exact slide count; zero means unbounded.
    pub fn exact(slides: usize) -> Self {
        NonZeroUsize::new(slides).map_or(Self::Unbounded, Self::Exact)
    }

    /// Maximum number of slides, or `None` when unbounded.
    pub fn limit(&self) -> Option<usize> {
        match self {
            Self::Exact(n) => Some(n.get()),
            Self::Unbounded => None,
        }
    }

    /// Whether a collection of `len` slides can take one more.
    pub fn has_room(&self, len: usize) -> bool {
        self.limit().is_none_or(|max| len < max)
    }

    /// Free slots left for a collection of `len` slides.
    pub fn remaining(&self, len: usize) -> Option<usize> {
        self.limit().map(|max| max.saturating_sub(len))
    }
}

impl Default for LayoutCap {
    fn default() -> Self {
        Self::Unbounded
    }
}

/// One row of the layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    /// Layout (style) id
    pub id: u32,
    /// Required number of slides
    pub slides: usize,
}

/// Lookup from layout id to slide cap.
///
/// # Examples
///
/// ```
/// use marquee_slides::{LayoutCap, LayoutCaps};
///
/// let caps = LayoutCaps::default();
/// assert_eq!(caps.resolve(Some(2)).limit(), Some(4));
/// assert_eq!(caps.resolve(Some(999)), LayoutCap::Unbounded);
/// assert_eq!(caps.resolve(None), LayoutCap::Unbounded);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LayoutEntry>", into = "Vec<LayoutEntry>")]
pub struct LayoutCaps {
    table: BTreeMap<u32, NonZeroUsize>,
}

/// Layouts shipped with the console.
const DEFAULT_LAYOUTS: [LayoutEntry; 4] = [
    LayoutEntry { id: 1, slides: 2 },
    LayoutEntry { id: 2, slides: 4 },
    LayoutEntry { id: 3, slides: 6 },
    LayoutEntry { id: 4, slides: 9 },
];

impl LayoutCaps {
    /// Table with no layouts; everything resolves to unbounded.
    pub fn empty() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    /// Build a table from entries.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry requires zero slides or an id repeats.
    pub fn from_entries(
        entries: impl IntoIterator<Item = LayoutEntry>,
    ) -> Result<Self, ConfigError> {
        let mut table = BTreeMap::new();
        for entry in entries {
            let slides = NonZeroUsize::new(entry.slides).ok_or_else(|| {
                ConfigError::new(format!("Layout {} must require at least one slide", entry.id))
            })?;
            if table.insert(entry.id, slides).is_some() {
                return Err(ConfigError::new(format!(
                    "Layout {} is declared more than once",
                    entry.id
                )));
            }
        }
        Ok(Self { table })
    }

    /// Cap for a layout; unknown or absent ids are unbounded.
    pub fn resolve(&self, layout_id: Option<u32>) -> LayoutCap {
        layout_id
            .and_then(|id| self.table.get(&id))
            .map_or(LayoutCap::Unbounded, |n| LayoutCap::Exact(*n))
    }

    /// Table rows in id order.
    pub fn entries(&self) -> Vec<LayoutEntry> {
        self.table
            .iter()
            .map(|(id, slides)| LayoutEntry {
                id: *id,
                slides: slides.get(),
            })
            .collect()
    }

    /// Number of known layouts.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table has no layouts.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for LayoutCaps {
    fn default() -> Self {
        Self {
            table: DEFAULT_LAYOUTS
                .iter()
                .filter_map(|entry| NonZeroUsize::new(entry.slides).map(|n| (entry.id, n)))
                .collect(),
        }
    }
}

impl TryFrom<Vec<LayoutEntry>> for LayoutCaps {
    type Error = ConfigError;

    fn try_from(entries: Vec<LayoutEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<LayoutCaps> for Vec<LayoutEntry> {
    fn from(caps: LayoutCaps) -> Self {
        caps.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_layout_needs_four_slides() {
        assert_eq!(LayoutCaps::default().resolve(Some(2)), LayoutCap::exact(4));
    }

    #[test]
    fn unknown_layouts_are_unbounded() {
        let caps = LayoutCaps::default();
        assert_eq!(caps.resolve(None), LayoutCap::Unbounded);
        assert_eq!(caps.resolve(Some(0)), LayoutCap::Unbounded);
        assert!(LayoutCaps::empty().resolve(Some(2)).limit().is_none());
    }

    #[test]
    fn rejects_zero_slide_layout() {
        let err = LayoutCaps::from_entries([LayoutEntry { id: 7, slides: 0 }]).unwrap_err();
        assert!(err.message.contains("Layout 7"));
    }

    #[test]
    fn rejects_duplicate_layout_ids() {
        let entries = [LayoutEntry { id: 5, slides: 1 }, LayoutEntry { id: 5, slides: 3 }];
        assert!(LayoutCaps::from_entries(entries).is_err());
    }

    #[test]
    fn deserializes_from_entry_list() {
        let caps: LayoutCaps =
            serde_json::from_str(r#"[{"id": 8, "slides": 3}, {"id": 2, "slides": 5}]"#).unwrap();
        assert_eq!(caps.resolve(Some(8)).limit(), Some(3));
        assert_eq!(caps.resolve(Some(2)).limit(), Some(5));
        assert_eq!(caps.entries()[0].id, 2);
        assert!(serde_json::from_str::<LayoutCaps>(r#"[{"id": 1, "slides": 0}]"#).is_err());
    }

    #[test]
    fn cap_arithmetic() {
        let cap = LayoutCap::exact(4);
        assert!(cap.has_room(3));
        assert!(!cap.has_room(4));
        assert_eq!(cap.remaining(1), Some(3));
        assert_eq!(cap.remaining(6), Some(0));
        assert!(LayoutCap::Unbounded.has_room(usize::MAX - 1));
        assert_eq!(LayoutCap::Unbounded.remaining(10), None);
        assert_eq!(LayoutCap::exact(0), LayoutCap::Unbounded);
        assert_eq!(cap.to_string(), "4 slides");
    }
}
