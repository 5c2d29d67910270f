//! Application configuration.
//!
//! The configuration is a JSON file mapping app names (as registered in
//! [`definitions`](crate::definitions)) to glyphs, plus the glyph to show
//! for windows no definition claims.
//!
//! # Example
//!
//! ```json
//! {
//!   "glyphs": {
//!     "browser": "",
//!     "youtube": "",
//!     "terminal": ""
//!   },
//!   "undefined": ""
//! }
//! ```

use crate::registry::RuleRegistry;
use crate::resolver::{resolve, GlyphMapping};
use crate::window::WindowDescriptor;
use log::warn;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Glyph shown when nothing matches and the config does not say otherwise.
pub const DEFAULT_UNDEFINED_GLYPH: &str = "?";

/// Top-level configuration.
///
/// Every field is optional; `{}` is a valid file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// App name to glyph.
    pub glyphs: GlyphMapping,
    /// Fallback glyph for unmatched windows.
    pub undefined: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            glyphs: GlyphMapping::new(),
            undefined: DEFAULT_UNDEFINED_GLYPH.into(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        Ok(config)
    }

    /// Like [`load`](Config::load), but a file that does not exist yields
    /// `Ok(None)`.  Unreadable or malformed files are still errors.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        match Self::load(path) {
            Ok(config) => Ok(Some(config)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Glyph to display for `window`.
    ///
    /// Falls back to [`undefined`](Config::undefined) when no definition
    /// matches.  A definition that fails on this window is logged and
    /// treated as no match so one odd window cannot take down the bar.
    pub fn glyph_for<'a>(&'a self, registry: &RuleRegistry, window: &WindowDescriptor) -> &'a str {
        match resolve(registry, window, &self.glyphs) {
            Ok(Some(glyph)) => glyph,
            Ok(None) => &self.undefined,
            Err(e) => {
                warn!("{}", e);
                &self.undefined
            }
        }
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config error: failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config error: failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Whether the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Read { source, .. } if source.kind() == ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::default_registry;
    use crate::registry::RegistryBuilder;

    #[test]
    fn deserialize_full_config() {
        let json = r#"{
            "glyphs": { "browser": "B", "youtube": "Y" },
            "undefined": "U"
        }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.glyphs.len(), 2);
        assert_eq!(cfg.glyphs["youtube"], "Y");
        assert_eq!(cfg.undefined, "U");
    }

    #[test]
    fn deserialize_empty_uses_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert!(cfg.glyphs.is_empty());
        assert_eq!(cfg.undefined, DEFAULT_UNDEFINED_GLYPH);
    }

    #[test]
    fn unknown_top_level_keys_ignored() {
        let json = r#"{ "glyphs": {}, "future_section": { "key": 42 } }"#;
        let _cfg: Config = serde_json::from_str(json).unwrap();
    }

    #[test]
    fn load_missing_file_fails() {
        let path = std::env::temp_dir().join(format!("appglyph-missing-{}.json", std::process::id()));
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("config error: failed to read"));
        assert!(err.is_not_found());
    }

    #[test]
    fn load_from_disk() {
        let path = std::env::temp_dir().join(format!("appglyph-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "glyphs": { "terminal": "T" } }"#).unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.glyphs["terminal"], "T");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_malformed_file_fails() {
        let path = std::env::temp_dir().join(format!("appglyph-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{ glyphs: ").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(!err.is_not_found());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_optional_tolerates_only_a_missing_file() {
        let missing = std::env::temp_dir().join(format!("appglyph-absent-{}.json", std::process::id()));
        assert!(Config::load_optional(&missing).unwrap().is_none());

        let bad = std::env::temp_dir().join(format!("appglyph-typo-{}.json", std::process::id()));
        std::fs::write(&bad, r#"{ "glyphs": { "browser": "B", } }"#).unwrap();
        let err = Config::load_optional(&bad).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        let _ = std::fs::remove_file(&bad);

        let good = std::env::temp_dir().join(format!("appglyph-good-{}.json", std::process::id()));
        std::fs::write(&good, r#"{ "undefined": "U" }"#).unwrap();
        let cfg = Config::load_optional(&good).unwrap().unwrap();
        assert_eq!(cfg.undefined, "U");
        let _ = std::fs::remove_file(&good);
    }

    #[test]
    fn glyph_for_uses_undefined_fallback() {
        let cfg: Config =
            serde_json::from_str(r#"{ "glyphs": { "steam": "S" }, "undefined": "U" }"#).unwrap();
        let reg = default_registry().unwrap();
        assert_eq!(cfg.glyph_for(reg, &WindowDescriptor::new().with_class("Steam")), "S");
        assert_eq!(cfg.glyph_for(reg, &WindowDescriptor::new().with_class("Gimp")), "U");
    }

    #[test]
    fn glyph_for_treats_predicate_failure_as_no_match() {
        let mut b = RegistryBuilder::new();
        b.register_fallible("broken", 0, |_| Err("boom".into())).unwrap();
        let reg = b.build();
        let mut cfg = Config::default();
        cfg.glyphs.insert("broken".into(), "X".into());
        assert_eq!(cfg.glyph_for(&reg, &WindowDescriptor::new()), DEFAULT_UNDEFINED_GLYPH);
    }
}
