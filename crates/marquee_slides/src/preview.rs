//! Preview handles for uploaded slides.
//!
//! Every upload gets a displayable preview URL while the editor is open. The
//! registry owns the outstanding handles; each one is released exactly once,
//! whether the slide is replaced, deleted, dropped by the cap, or the whole
//! collection goes away.

use marquee_core::UploadFile;
use std::collections::HashSet;
use tracing::{debug, trace};
use uuid::Uuid;

/// Handle to the preview of one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("blob:marquee/{}", id)]
pub struct PreviewHandle {
    id: Uuid,
}

impl PreviewHandle {
    fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }

    /// Unique id of the handle.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Displayable URL for the preview.
    pub fn url(&self) -> String {
        self.to_string()
    }
}

type ReleaseHook = Box<dyn FnMut(&PreviewHandle) + Send>;

/// Registry of outstanding preview handles.
///
/// A release hook lets the embedding UI free whatever backs the preview
/// (an object URL, a texture) at the moment the registry lets go of it.
///
/// # Examples
///
/// ```
/// use marquee_core::UploadFile;
/// use marquee_slides::PreviewRegistry;
///
/// let mut registry = PreviewRegistry::new();
/// let handle = registry.acquire(&UploadFile::new("a.png", "image/png", vec![1]));
/// assert_eq!(registry.outstanding(), 1);
/// assert!(registry.release(&handle));
/// assert!(!registry.release(&handle));
/// assert_eq!(registry.released(), 1);
/// ```
#[derive(Default)]
pub struct PreviewRegistry {
    outstanding: HashSet<PreviewHandle>,
    acquired: u64,
    released: u64,
    on_release: Option<ReleaseHook>,
}

impl std::fmt::Debug for PreviewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewRegistry")
            .field("outstanding", &self.outstanding.len())
            .field("acquired", &self.acquired)
            .field("released", &self.released)
            .field("on_release", &self.on_release.is_some())
            .finish()
    }
}

impl PreviewRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that calls `hook` for every released handle.
    pub fn with_release_hook(hook: impl FnMut(&PreviewHandle) + Send + 'static) -> Self {
        Self {
            on_release: Some(Box::new(hook)),
            ..Self::default()
        }
    }

    /// Allocate a preview for `file`.
    pub fn acquire(&mut self, file: &UploadFile) -> PreviewHandle {
        let handle = PreviewHandle::new();
        trace!(handle = %handle, name = file.name(), "Acquired preview");
        self.outstanding.insert(handle.clone());
        self.acquired += 1;
        handle
    }

    /// Release a handle. Returns `false` if it was not outstanding.
    pub fn release(&mut self, handle: &PreviewHandle) -> bool {
        if !self.outstanding.remove(handle) {
            return false;
        }
        trace!(handle = %handle, "Released preview");
        self.released += 1;
        if let Some(hook) = self.on_release.as_mut() {
            hook(handle);
        }
        true
    }

    /// Release every outstanding handle, returning how many were released.
    pub fn release_all(&mut self) -> usize {
        let handles: Vec<PreviewHandle> = self.outstanding.iter().cloned().collect();
        let count = handles.iter().filter(|h| self.release(h)).count();
        if count > 0 {
            debug!(count, "Released all outstanding previews");
        }
        count
    }

    /// Whether `handle` is currently held by this registry.
    pub fn contains(&self, handle: &PreviewHandle) -> bool {
        self.outstanding.contains(handle)
    }

    /// Number of handles not yet released.
    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }

    /// Total handles ever acquired.
    pub fn acquired(&self) -> u64 {
        self.acquired
    }

    /// Total handles released.
    pub fn released(&self) -> u64 {
        self.released
    }
}
