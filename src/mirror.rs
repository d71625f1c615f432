// SPDX-License-Identifier: MPL-2.0
//! Consolidates a checkout of the upstream icon repository into the asset layout.
//!
//! Upstream publishes one file per size and style:
//! `{src}/{category}/{name}/{style_dir}/24px.svg`, with style directories
//! such as `materialiconsround`. The asset store wants a flat
//! `{icon_dir}/{style}/{name}.svg` tree. Fetching the checkout itself is
//! left to the caller.

use crate::error::{Error, Result};
use crate::style::IconStyle;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// The only upstream rendition that is mirrored.
pub const UPSTREAM_ICON_FILE: &str = "24px.svg";

/// Outcome of a mirroring run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorReport {
    /// Files written into the asset store.
    pub copied: usize,

    /// Style directories that were ignored (unmapped or not requested).
    pub skipped: usize,

    /// Files written per style.
    pub per_style: BTreeMap<IconStyle, usize>,
}

/// Copies every `24px.svg` of the requested `styles` from `upstream_src` into `icon_dir`.
///
/// An empty `styles` slice mirrors all known styles. Existing files are overwritten.
///
/// # Errors
///
/// Returns [`Error::Io`] if `upstream_src` is missing or a copy fails.
pub fn mirror_icons(
    upstream_src: &Path,
    icon_dir: &Path,
    styles: &[IconStyle],
) -> Result<MirrorReport> {
    if !upstream_src.is_dir() {
        return Err(Error::Io(format!(
            "upstream icon source not found: {}",
            upstream_src.display()
        )));
    }

    let wanted = |style: IconStyle| styles.is_empty() || styles.contains(&style);
    let mut report = MirrorReport::default();

    for category in subdirectories(upstream_src)? {
        for icon in subdirectories(&category)? {
            let Some(name) = icon.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            for style_dir in subdirectories(&icon)? {
                let source = style_dir.join(UPSTREAM_ICON_FILE);
                if !source.is_file() {
                    continue;
                }

                let style = style_dir
                    .file_name()
                    .and_then(|n| n.to_str())
                    .and_then(IconStyle::from_upstream_dir);

                match style {
                    Some(style) if wanted(style) => {
                        let target_dir = icon_dir.join(style.as_str());
                        fs::create_dir_all(&target_dir)?;
                        fs::copy(&source, target_dir.join(format!("{}.svg", name)))?;
                        report.copied += 1;
                        *report.per_style.entry(style).or_default() += 1;
                    }
                    _ => {
                        log::debug!("skipping {}", source.display());
                        report.skipped += 1;
                    }
                }
            }
        }
    }

    log::info!(
        "mirrored {} icons into {} ({} skipped)",
        report.copied,
        icon_dir.display(),
        report.skipped
    );
    Ok(report)
}

fn subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}
