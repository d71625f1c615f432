// SPDX-License-Identifier: MPL-2.0
//! Style variants an icon may be published under.
//!
//! Each style maps to one lowercase subdirectory of the asset store
//! (`{icon_dir}/{style}/{name}.svg`).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix shared by every style directory in the upstream icon repository.
const UPSTREAM_PREFIX: &str = "materialicons";

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    #[default]
    Outlined,
    Round,
    Sharp,
    #[serde(alias = "two-tone", alias = "two_tone")]
    TwoTone,
}

impl IconStyle {
    pub const ALL: [IconStyle; 4] = [
        IconStyle::Outlined,
        IconStyle::Round,
        IconStyle::Sharp,
        IconStyle::TwoTone,
    ];

    /// Directory name of this style inside the asset store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IconStyle::Outlined => "outlined",
            IconStyle::Round => "round",
            IconStyle::Sharp => "sharp",
            IconStyle::TwoTone => "twotone",
        }
    }

    /// Maps an upstream style directory (e.g. `materialiconsround`) to a style.
    ///
    /// The plain `materialicons` (filled) directory has no local counterpart
    /// and yields `None`.
    pub fn from_upstream_dir(dir_name: &str) -> Option<Self> {
        let lower = dir_name.to_ascii_lowercase();
        let suffix = lower.strip_prefix(UPSTREAM_PREFIX)?;
        Self::ALL.into_iter().find(|style| style.as_str() == suffix)
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "outlined" => Ok(IconStyle::Outlined),
            "round" => Ok(IconStyle::Round),
            "sharp" => Ok(IconStyle::Sharp),
            "twotone" | "two-tone" | "two_tone" => Ok(IconStyle::TwoTone),
            other => Err(Error::InvalidInput(format!(
                "unknown icon style '{}' (expected one of: outlined, round, sharp, twotone)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_directory_names() {
        for style in IconStyle::ALL {
            assert_eq!(style.as_str().parse::<IconStyle>().unwrap(), style);
        }
    }

    #[test]
    fn parse_accepts_two_tone_aliases() {
        assert_eq!("two-tone".parse::<IconStyle>().unwrap(), IconStyle::TwoTone);
        assert_eq!("two_tone".parse::<IconStyle>().unwrap(), IconStyle::TwoTone);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(matches!(
            "Outlined".parse::<IconStyle>(),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn upstream_directories_map_to_styles() {
        assert_eq!(
            IconStyle::from_upstream_dir("materialiconsoutlined"),
            Some(IconStyle::Outlined)
        );
        assert_eq!(
            IconStyle::from_upstream_dir("MaterialIconsRound"),
            Some(IconStyle::Round)
        );
        assert_eq!(
            IconStyle::from_upstream_dir("materialiconstwotone"),
            Some(IconStyle::TwoTone)
        );
        assert_eq!(IconStyle::from_upstream_dir("materialicons"), None);
        assert_eq!(IconStyle::from_upstream_dir("outlined"), None);
    }

    #[test]
    fn display_matches_directory_name() {
        assert_eq!(IconStyle::Sharp.to_string(), "sharp");
        assert_eq!(IconStyle::default(), IconStyle::Outlined);
    }
}
