//! Background warm-up of gallery images.
//!
//! Assets are read in small batches with a pause between batches. Failures
//! are logged and skipped; nothing is retried.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const DEFAULT_BATCH_SIZE: usize = 5;
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_millis(100);

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

#[derive(Clone)]
pub struct Preloader {
    inner: Arc<Inner>,
}

struct Inner {
    assets: Vec<PathBuf>,
    batch_size: usize,
    delay: Duration,
    started: AtomicBool,
    loaded: Mutex<HashSet<PathBuf>>,
}

impl Preloader {
    pub fn new(assets: Vec<PathBuf>, batch_size: usize, delay: Duration) -> Self {
        Preloader {
            inner: Arc::new(Inner {
                assets,
                batch_size: batch_size.max(1),
                delay,
                started: AtomicBool::new(false),
                loaded: Mutex::new(HashSet::new()),
            }),
        }
    }

    /// Kick off the warm-up in the background. Only the first call does anything.
    pub fn start(&self) {
        if self.inner.started.swap(true, Ordering::SeqCst) {
            return;
        }
        let inner = self.inner.clone();
        tokio::spawn(async move { inner.run_batches().await });
    }

    /// Run the warm-up to completion. Returns immediately if it already started.
    pub async fn run(&self) {
        if self.inner.started.swap(true, Ordering::SeqCst) {
            return;
        }
        self.inner.run_batches().await;
    }

    pub fn assets(&self) -> &[PathBuf] {
        &self.inner.assets
    }

    pub fn is_loaded(&self, asset: &Path) -> bool {
        self.inner.is_loaded(asset)
    }

    pub fn loaded_count(&self) -> usize {
        self.inner.loaded.lock().map(|l| l.len()).unwrap_or(0)
    }
}

impl Inner {
    async fn run_batches(&self) {
        let batches: Vec<_> = self.assets.chunks(self.batch_size).collect();
        let count = batches.len();

        for (i, batch) in batches.into_iter().enumerate() {
            for asset in batch {
                if self.is_loaded(asset) {
                    continue;
                }
                match tokio::fs::read(asset).await {
                    Ok(bytes) => {
                        log::debug!("Preloaded {} ({} bytes)", asset.display(), bytes.len());
                        if let Ok(mut loaded) = self.loaded.lock() {
                            loaded.insert(asset.clone());
                        }
                    }
                    Err(e) => log::warn!("Failed to preload image {}: {}", asset.display(), e),
                }
            }

            if i + 1 < count {
                tokio::time::sleep(self.delay).await;
            }
        }
    }

    fn is_loaded(&self, asset: &Path) -> bool {
        self.loaded
            .lock()
            .map(|loaded| loaded.contains(asset))
            .unwrap_or(false)
    }
}

/// Image files directly inside `dir`, sorted by name. A missing directory
/// yields an empty list.
pub fn gallery_images(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut images: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_image(path))
        .collect();

    images.sort();
    images
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
