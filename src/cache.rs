// SPDX-License-Identifier: MPL-2.0
//! Rasterized icon cache.
//!
//! Resolves `(name, size, color, style)` requests to PNG bytes, rasterizing
//! each distinct request at most once.
//!
//! # Design
//!
//! - **Exact keys**: requests are compared field by field, no normalization
//!   (`"#FFF"` and `"#ffffff"` are different entries)
//! - **Unbounded by default**: entries live until [`IconRasterCache::clear`]
//!   or until the cache is dropped; an optional capacity turns on LRU eviction
//! - **Thread-safe**: the cache is `Sync`. Concurrent first requests for one
//!   key wait on a per-key slot so only one of them rasterizes
//! - **Failures are not cached**: a failed request is retried on the next call
//!
//! # Usage
//!
//! ```no_run
//! use material_icons::{CacheConfig, IconRasterCache, IconStyle};
//!
//! let cache = IconRasterCache::new("assets/icons", CacheConfig::default());
//! let png = cache.resolve("close", 24, "#000000", IconStyle::Outlined)?;
//! assert!(!png.is_empty());
//! # Ok::<(), material_icons::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::rasterizer::{Rasterizer, ResvgRasterizer};
use crate::recolor;
use crate::style::IconStyle;
use lru::LruCache;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Encoded raster output shared between the cache and its callers.
pub type RasterBytes = Arc<Vec<u8>>;

/// Cache key: one logical icon rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconRequest {
    /// Asset file stem, e.g. `close` or `check_box`.
    pub name: String,

    /// Target width and height in pixels.
    pub size: u32,

    /// Fill colour handed to the source unchanged, e.g. `#000000`.
    pub color: String,

    pub style: IconStyle,
}

impl IconRequest {
    pub fn new(
        name: impl Into<String>,
        size: u32,
        color: impl Into<String>,
        style: IconStyle,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            color: color.into(),
            style,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::InvalidInput("icon name must not be empty".into()));
        }
        if self.name.contains(['/', '\\']) || self.name.contains("..") {
            return Err(Error::InvalidInput(format!(
                "icon name '{}' must be a plain file stem",
                self.name
            )));
        }
        if self.size == 0 {
            return Err(Error::InvalidInput(format!(
                "icon '{}' requested with size 0",
                self.name
            )));
        }
        Ok(())
    }
}

/// Configuration for the icon cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries; `None` keeps every entry.
    pub capacity: Option<NonZeroUsize>,
}

impl CacheConfig {
    /// Creates a configuration that never evicts.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { capacity: None }
    }

    /// Creates an LRU-bounded configuration. A capacity of zero means unbounded.
    #[must_use]
    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: NonZeroUsize::new(capacity),
        }
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of entries currently held (including resolutions in progress).
    pub entries: usize,

    /// Requests answered from the cache.
    pub hits: u64,

    /// Requests that had to load and rasterize an asset.
    pub misses: u64,

    /// Successful rasterizations.
    pub rasterizations: u64,

    /// Number of entries evicted due to the capacity limit.
    pub evictions: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Per-key result cell. `None` until the first successful rasterization.
type Slot = Arc<Mutex<Option<RasterBytes>>>;

struct Inner {
    slots: LruCache<IconRequest, Slot>,
    stats: CacheStats,
}

/// Inserts `slot` for `request`, counting any entry evicted to make room.
fn register(inner: &mut Inner, request: &IconRequest, slot: Slot) {
    if let Some((evicted, _)) = inner.slots.push(request.clone(), slot) {
        log::debug!("icon cache evicted: {} ({})", evicted.name, evicted.style);
        inner.stats.evictions += 1;
    }
    inner.stats.entries = inner.slots.len();
}

/// Loads, recolors and rasterizes icons from an asset directory, caching the output.
///
/// Lock order is slot first, then the map; the map lock is never held while
/// waiting on a slot.
pub struct IconRasterCache {
    icon_dir: PathBuf,
    config: CacheConfig,
    rasterizer: Box<dyn Rasterizer>,
    inner: Mutex<Inner>,
}

impl IconRasterCache {
    /// Creates a cache over `icon_dir` that renders with [`ResvgRasterizer`].
    pub fn new(icon_dir: impl Into<PathBuf>, config: CacheConfig) -> Self {
        Self::with_rasterizer(icon_dir, config, ResvgRasterizer)
    }

    /// Creates a cache with a custom rasterization backend.
    pub fn with_rasterizer(
        icon_dir: impl Into<PathBuf>,
        config: CacheConfig,
        rasterizer: impl Rasterizer + 'static,
    ) -> Self {
        let slots = match config.capacity {
            Some(capacity) => LruCache::new(capacity),
            None => LruCache::unbounded(),
        };

        Self {
            icon_dir: icon_dir.into(),
            config,
            rasterizer: Box::new(rasterizer),
            inner: Mutex::new(Inner {
                slots,
                stats: CacheStats::default(),
            }),
        }
    }

    /// Resolves an icon to PNG bytes of `size` x `size` pixels.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] for an empty or path-like name, or a zero size
    /// - [`Error::NotFound`] if `{icon_dir}/{style}/{name}.svg` does not exist
    /// - [`Error::Rasterization`] if the source cannot be recolored or rendered
    /// - [`Error::Io`] if the asset exists but cannot be read
    pub fn resolve(
        &self,
        name: &str,
        size: u32,
        color: &str,
        style: IconStyle,
    ) -> Result<RasterBytes> {
        self.resolve_request(&IconRequest::new(name, size, color, style))
    }

    /// Resolves a prepared [`IconRequest`]. See [`Self::resolve`].
    pub fn resolve_request(&self, request: &IconRequest) -> Result<RasterBytes> {
        request.validate()?;

        let slot = self.slot_for(request);
        let mut cell = lock(&slot);

        if let Some(bytes) = cell.as_ref() {
            lock(&self.inner).stats.hits += 1;
            log::debug!(
                "icon cache hit: {} ({}, {}px, {})",
                request.name,
                request.style,
                request.size,
                request.color
            );
            return Ok(Arc::clone(bytes));
        }

        lock(&self.inner).stats.misses += 1;

        match self.render(request) {
            Ok(png) => {
                let bytes = Arc::new(png);
                *cell = Some(Arc::clone(&bytes));

                let mut inner = lock(&self.inner);
                inner.stats.rasterizations += 1;
                // A failed resolver or an eviction may have dropped the slot
                // while this one was rendering.
                if !inner.slots.contains(request) {
                    register(&mut inner, request, Arc::clone(&slot));
                }
                Ok(bytes)
            }
            Err(err) => {
                let mut inner = lock(&self.inner);
                let still_current = inner
                    .slots
                    .peek(request)
                    .is_some_and(|current| Arc::ptr_eq(current, &slot));
                if still_current {
                    inner.slots.pop(request);
                }
                inner.stats.entries = inner.slots.len();
                Err(err)
            }
        }
    }

    /// Returns the slot for `request`, registering an empty one on first use.
    fn slot_for(&self, request: &IconRequest) -> Slot {
        let mut inner = lock(&self.inner);

        if let Some(slot) = inner.slots.get(request) {
            return Arc::clone(slot);
        }

        let slot = Slot::default();
        register(&mut inner, request, Arc::clone(&slot));
        slot
    }

    fn render(&self, request: &IconRequest) -> Result<Vec<u8>> {
        let path = self.asset_path(&request.name, request.style);
        if !path.is_file() {
            return Err(Error::NotFound {
                name: request.name.clone(),
                style: request.style,
                path,
            });
        }

        let source = String::from_utf8(fs::read(&path)?).map_err(|e| {
            Error::Rasterization(format!("{} is not valid UTF-8: {}", path.display(), e))
        })?;
        let recolored = recolor::inject_fill(&source, &request.color)?;

        log::debug!(
            "rasterizing {} at {}px in {}",
            path.display(),
            request.size,
            request.color
        );
        self.rasterizer
            .rasterize(recolored.as_bytes(), request.size, request.size)
    }

    /// Conventional location of the source asset for `(name, style)`.
    #[must_use]
    pub fn asset_path(&self, name: &str, style: IconStyle) -> PathBuf {
        self.icon_dir
            .join(style.as_str())
            .join(format!("{}.svg", name))
    }

    /// Checks if a rasterized entry exists for `request` without updating LRU order.
    #[must_use]
    pub fn contains(&self, request: &IconRequest) -> bool {
        let Some(slot) = lock(&self.inner).slots.peek(request).cloned() else {
            return false;
        };
        let filled = lock(&slot).is_some();
        filled
    }

    /// Drops every cached entry. Statistics other than `entries` are kept.
    pub fn clear(&self) {
        let mut inner = lock(&self.inner);
        inner.slots.clear();
        inner.stats.entries = 0;
    }

    /// Returns the number of entries, including resolutions in progress.
    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.inner).slots.len()
    }

    /// Returns whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        lock(&self.inner).stats
    }

    /// Returns the cache configuration.
    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Root of the asset store this cache reads from.
    #[must_use]
    pub fn icon_dir(&self) -> &Path {
        &self.icon_dir
    }
}

impl std::fmt::Debug for IconRasterCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconRasterCache")
            .field("icon_dir", &self.icon_dir)
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

/// A panic while rasterizing must not wedge every later request.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
