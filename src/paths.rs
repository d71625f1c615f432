// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the asset store and configuration.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (config file, tests)
//! 2. **CLI arguments** (`--icon-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`MATERIAL_ICONS_DIR`, `MATERIAL_ICONS_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(icon_dir, config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "material-icons";

/// Subdirectory of the data directory holding the `{style}/{name}.svg` tree.
const ICONS_SUBDIR: &str = "icons";

/// Environment variable to override the asset directory.
pub const ENV_ICON_DIR: &str = "MATERIAL_ICONS_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "MATERIAL_ICONS_CONFIG_DIR";

/// Global CLI override for the asset directory (set once at startup).
static CLI_ICON_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the asset and config directories.
///
/// Later calls are ignored; the first values stay in effect.
pub fn init_cli_overrides(icon_dir: Option<PathBuf>, config_dir: Option<PathBuf>) {
    set_overrides(&CLI_ICON_DIR, &CLI_CONFIG_DIR, icon_dir, config_dir);
}

/// Sets each cell independently, so an already-set cell does not block the other.
fn set_overrides(
    icon_cell: &OnceLock<Option<PathBuf>>,
    config_cell: &OnceLock<Option<PathBuf>>,
    icon_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) {
    let icon_set = icon_cell.set(icon_dir).is_ok();
    let config_set = config_cell.set(config_dir).is_ok();
    if !(icon_set && config_set) {
        log::warn!("CLI path overrides already initialized; ignoring new values");
    }
}

fn get_cli_icon_dir() -> Option<PathBuf> {
    CLI_ICON_DIR.get().and_then(Clone::clone)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the asset directory.
///
/// Platform default:
/// - Linux: `~/.local/share/material-icons/icons/`
/// - macOS: `~/Library/Application Support/material-icons/icons/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\material-icons\icons\`
pub fn get_icon_dir() -> Option<PathBuf> {
    get_icon_dir_with_override(None)
}

/// Returns the asset directory with an optional override taking highest priority.
pub fn get_icon_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(get_cli_icon_dir)
        .or_else(|| env_path(ENV_ICON_DIR))
        .or_else(|| {
            dirs::data_dir().map(|mut path| {
                path.push(APP_NAME);
                path.push(ICONS_SUBDIR);
                path
            })
        })
}

/// Returns the config directory holding `settings.toml`.
pub fn get_config_dir() -> Option<PathBuf> {
    get_config_dir_with_override(None)
}

/// Returns the config directory with an optional override taking highest priority.
pub fn get_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(get_cli_config_dir)
        .or_else(|| env_path(ENV_CONFIG_DIR))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}
