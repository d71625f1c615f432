// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Rendering**: Icon size, colour and style used when a request omits them
//! - **Cache**: Entry limit for the raster cache

use crate::style::IconStyle;

// ==========================================================================
// Rendering Defaults
// ==========================================================================

/// Default icon edge length in pixels (the upstream design grid).
pub const DEFAULT_ICON_SIZE: u32 = 24;

/// Default fill colour.
pub const DEFAULT_COLOR: &str = "#000000";

/// Default style variant.
pub const DEFAULT_STYLE: IconStyle = IconStyle::Outlined;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Default maximum number of cached rasters. Zero keeps every entry.
pub const DEFAULT_CACHE_CAPACITY: usize = 0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_ICON_SIZE > 0);
    assert!(!DEFAULT_COLOR.is_empty());
};
