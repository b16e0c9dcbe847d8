//! Image lookup for `Image` elements.
//!
//! The engine never decodes images. A provider maps a source key (and,
//! optionally, the bound data object) to an opaque handle plus the image's
//! intrinsic size, which is all layout needs.

use crate::ContentHandle;
use pagebuilder_types::Size;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for resource loading operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Invalid resource format: {0}")]
    InvalidFormat(String),
}

/// Raw image bytes shared between the store and the items that reference them.
pub type SharedImageData = Arc<Vec<u8>>;

/// An image ready for placement.
#[derive(Clone)]
pub struct ResolvedImage {
    /// Passed back untouched to [`crate::DrawSurface::draw_image`].
    pub handle: ContentHandle,
    /// Intrinsic size in points.
    pub size: Size,
}

impl Debug for ResolvedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedImage")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Resolves image source keys into drawable handles.
pub trait ImageProvider: Send + Sync + Debug {
    /// Look up the image named by `key`.
    ///
    /// `data` is the object the page is being laid out against, for providers
    /// that derive images from record content.
    fn image(&self, key: &str, data: &Value) -> Result<ResolvedImage, ResourceError>;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An image held by [`InMemoryImageProvider`]. The handle downcasts to this type.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub key: String,
    pub data: SharedImageData,
    pub size: Size,
}

/// An in-memory image store.
///
/// Images must be added with their intrinsic size before use.
#[derive(Debug, Default)]
pub struct InMemoryImageProvider {
    images: RwLock<HashMap<String, Arc<StoredImage>>>,
}

impl InMemoryImageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image under `key`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(
        &self,
        key: impl Into<String>,
        data: Vec<u8>,
        size: Size,
    ) -> Result<(), ResourceError> {
        let key = key.into();
        let mut images = self.images.write().map_err(|_| ResourceError::LoadFailed {
            path: key.clone(),
            message: "image store lock poisoned".to_string(),
        })?;
        let stored = StoredImage {
            key: key.clone(),
            data: Arc::new(data),
            size,
        };
        images.insert(key, Arc::new(stored));
        Ok(())
    }

    /// Remove an image from the store.
    ///
    /// Returns `None` if the lock is poisoned or the image doesn't exist.
    pub fn remove(&self, key: &str) -> Option<Arc<StoredImage>> {
        self.images.write().ok()?.remove(key)
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.images.read().map(|i| i.len()).unwrap_or(0)
    }

    /// Returns `true` if the lock is poisoned.
    pub fn is_empty(&self) -> bool {
        self.images.read().map(|i| i.is_empty()).unwrap_or(true)
    }
}

impl ImageProvider for InMemoryImageProvider {
    fn image(&self, key: &str, _data: &Value) -> Result<ResolvedImage, ResourceError> {
        let images = self.images.read().map_err(|_| ResourceError::LoadFailed {
            path: key.to_string(),
            message: "image store lock poisoned".to_string(),
        })?;
        let stored = images
            .get(key)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(key.to_string()))?;
        let size = stored.size;
        Ok(ResolvedImage {
            handle: stored,
            size,
        })
    }

    fn name(&self) -> &'static str {
        "InMemoryImageProvider"
    }
}
