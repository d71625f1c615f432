// SPDX-License-Identifier: MPL-2.0
//! Enumerates the icons available in an asset directory.

use crate::error::Result;
use crate::style::IconStyle;
use std::path::Path;

const ICON_EXTENSION: &str = "svg";

/// Returns the sorted names of every icon published under `style`.
///
/// A missing style directory is not an error: it yields an empty list so
/// callers can render an empty state, matching a store that was only
/// partially mirrored.
///
/// # Errors
///
/// Returns an error if the style directory exists but cannot be read.
pub fn list_icons(icon_dir: &Path, style: IconStyle) -> Result<Vec<String>> {
    let style_dir = icon_dir.join(style.as_str());
    if !style_dir.is_dir() {
        log::warn!("Icons directory not found: {}", style_dir.display());
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(&style_dir)? {
        let path = entry?.path();
        if path.is_file() && is_icon_source(&path) {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
    }

    names.sort();
    Ok(names)
}

/// Returns the styles that have a directory in `icon_dir`.
pub fn available_styles(icon_dir: &Path) -> Vec<IconStyle> {
    IconStyle::ALL
        .into_iter()
        .filter(|style| icon_dir.join(style.as_str()).is_dir())
        .collect()
}

fn is_icon_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == ICON_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lists_sorted_svg_stems() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let outlined = temp_dir.path().join("outlined");
        fs::create_dir_all(&outlined).unwrap();
        for file in ["search.svg", "close.svg", "check_box.svg", "notes.txt"] {
            fs::write(outlined.join(file), "<svg/>").unwrap();
        }
        fs::create_dir_all(outlined.join("nested.svg")).unwrap();

        let names = list_icons(temp_dir.path(), IconStyle::Outlined).unwrap();
        assert_eq!(names, vec!["check_box", "close", "search"]);
    }

    #[test]
    fn missing_style_directory_is_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let names = list_icons(temp_dir.path(), IconStyle::Sharp).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn available_styles_reports_existing_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("round")).unwrap();
        fs::create_dir_all(temp_dir.path().join("twotone")).unwrap();
        fs::create_dir_all(temp_dir.path().join("filled")).unwrap();

        assert_eq!(
            available_styles(temp_dir.path()),
            vec![IconStyle::Round, IconStyle::TwoTone]
        );
    }
}
