// SPDX-License-Identifier: MPL-2.0
//! `material_icons` loads Material Design icons from a local asset store,
//! recolors them, rasterizes them to PNG and caches the result.
//!
//! The asset store is a directory tree laid out as `{style}/{name}.svg`,
//! populated by [`mirror::mirror_icons`] from a checkout of the upstream
//! icon repository.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod mirror;
pub mod paths;
pub mod rasterizer;
pub mod recolor;
pub mod style;

pub use cache::{CacheConfig, CacheStats, IconRasterCache, IconRequest, RasterBytes};
pub use error::{Error, Result};
pub use rasterizer::{Rasterizer, ResvgRasterizer};
pub use style::IconStyle;
