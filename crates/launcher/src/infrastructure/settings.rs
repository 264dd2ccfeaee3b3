//! Runtime settings for the launcher process.
//!
//! [`LauncherSettings`] is the single source of truth for where the launcher
//! keeps its files and how verbose it logs.  `main.rs` fills it from command
//! line arguments and environment variables; tests build it directly.
//!
//! The default configuration directory is platform specific:
//! - Windows:  `%APPDATA%\SlashLauncher`
//! - Linux:    `$XDG_CONFIG_HOME/slash-launcher` or `~/.config/slash-launcher`
//! - macOS:    `~/Library/Application Support/SlashLauncher`

use std::path::PathBuf;

use thiserror::Error;

/// Default `tracing` filter when neither `RUST_LOG` nor `--log-level` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Error type for settings resolution.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// No directory was given and the platform config base could not be
    /// determined from the environment.
    #[error("could not determine platform config directory; pass --config-dir")]
    NoPlatformConfigDir,
}

/// Resolved launcher settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSettings {
    /// Directory holding `config.json` and `errors.log`.
    pub config_dir: PathBuf,
    /// `tracing` filter directive, e.g. `"info"` or `"launcher=debug"`.
    pub log_level: String,
}

impl LauncherSettings {
    /// Builds settings, falling back to the platform config directory when
    /// `config_dir` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NoPlatformConfigDir`] if no directory was
    /// given and none can be derived from the environment.
    pub fn resolve(
        config_dir: Option<PathBuf>,
        log_level: impl Into<String>,
    ) -> Result<Self, SettingsError> {
        let config_dir = match config_dir {
            Some(dir) => dir,
            None => platform_config_dir().ok_or(SettingsError::NoPlatformConfigDir)?,
        };
        Ok(Self {
            config_dir,
            log_level: log_level.into(),
        })
    }
}

/// Resolves the platform config directory for the launcher.
pub fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("SlashLauncher"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("slash-launcher"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("SlashLauncher")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_dir_wins() {
        let settings = LauncherSettings::resolve(Some(PathBuf::from("/srv/launcher")), "debug")
            .expect("resolve");
        assert_eq!(settings.config_dir, PathBuf::from("/srv/launcher"));
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_default_dir_is_platform_dir_when_available() {
        // Stripped CI environments may lack HOME/APPDATA; only assert when a
        // platform dir can be resolved.
        if let Some(expected) = platform_config_dir() {
            let settings = LauncherSettings::resolve(None, DEFAULT_LOG_LEVEL).expect("resolve");
            assert_eq!(settings.config_dir, expected);
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_platform_dir_ends_with_app_name() {
        if let Some(dir) = platform_config_dir() {
            assert!(dir.ends_with("slash-launcher"), "got {dir:?}");
        }
    }
}
