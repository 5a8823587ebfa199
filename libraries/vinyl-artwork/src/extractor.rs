use crate::error::{ArtworkError, Result};
use crate::id3::{extract_album_art, READ_WINDOW};
use crate::types::ArtworkData;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::io::AsyncReadExt;

type ArtworkCache = LruCache<PathBuf, Arc<ArtworkData>>;

/// Extracts artwork from audio files with LRU caching
pub struct ArtworkExtractor {
    cache: Arc<Mutex<ArtworkCache>>,
}

impl ArtworkExtractor {
    /// Create a new artwork extractor with the specified cache size
    ///
    /// # Arguments
    /// * `cache_size` - Maximum number of images to cache (0 keeps a single entry)
    pub fn new(cache_size: usize) -> Self {
        let capacity = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Extract artwork from an audio file
    ///
    /// Only the first [`READ_WINDOW`] bytes are read. Returns `Ok(None)` if the
    /// file has no (readable) embedded art, or `Err` if the file can't be read.
    ///
    /// # Arguments
    /// * `path` - Path to the audio file
    pub async fn extract_from_path(&self, path: &Path) -> Result<Option<ArtworkData>> {
        // Canonicalize path for consistent cache keys
        let canonical_path = tokio::fs::canonicalize(path)
            .await
            .unwrap_or_else(|_| path.to_path_buf());

        if let Some(cached) = self.lock_cache().get(&canonical_path) {
            return Ok(Some((**cached).clone()));
        }

        let head = read_head(path).await?;
        let Some(artwork) = extract_album_art(&head) else {
            return Ok(None);
        };

        self.lock_cache()
            .put(canonical_path, Arc::new(artwork.clone()));
        Ok(Some(artwork))
    }

    /// Extract artwork from bytes already in memory (no caching)
    ///
    /// The buffer is truncated to [`READ_WINDOW`] first, so the result is the
    /// same as reading the file from disk.
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Option<ArtworkData> {
        let window = &bytes[..bytes.len().min(READ_WINDOW)];
        extract_album_art(window)
    }

    /// Extract artwork and encode it as a `data:` URI
    ///
    /// # Arguments
    /// * `path` - Path to the audio file
    pub async fn extract_data_uri(&self, path: &Path) -> Result<Option<String>> {
        Ok(self
            .extract_from_path(path)
            .await?
            .map(|artwork| artwork.to_data_uri()))
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    /// Number of cached images
    pub fn cached_len(&self) -> usize {
        self.lock_cache().len()
    }

    fn lock_cache(&self) -> MutexGuard<'_, ArtworkCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ArtworkExtractor {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Read at most [`READ_WINDOW`] bytes from the start of a file
async fn read_head(path: &Path) -> Result<Vec<u8>> {
    let file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ArtworkError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let mut head = Vec::with_capacity(READ_WINDOW);
    file.take(READ_WINDOW as u64).read_to_end(&mut head).await?;
    Ok(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extractor_creation() {
        let extractor = ArtworkExtractor::new(10);
        assert_eq!(extractor.cached_len(), 0);
    }

    #[tokio::test]
    async fn extract_nonexistent_file_returns_error() {
        let extractor = ArtworkExtractor::new(10);
        let result = extractor
            .extract_from_path(Path::new("/nonexistent/file.mp3"))
            .await;
        assert!(matches!(result, Err(ArtworkError::FileNotFound(_))));
    }

    #[test]
    fn clear_cache_works() {
        let extractor = ArtworkExtractor::new(0);
        extractor.clear_cache();
        assert_eq!(extractor.cached_len(), 0);
    }

    #[test]
    fn bytes_without_tag_yield_nothing() {
        let extractor = ArtworkExtractor::default();
        assert!(extractor.extract_from_bytes(b"not an mp3").is_none());
        assert!(extractor.extract_from_bytes(&[]).is_none());
    }
}
