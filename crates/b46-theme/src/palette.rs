//! The core base16 palette — 16 canonical slots — and theme appearance.
//!
//! Every theme must define all of `base00`…`base0F` once references are
//! resolved. Construction goes through [`Base16Palette::from_entries`],
//! which is the single validation point for the whole pipeline; after it
//! succeeds the palette is total and slot lookups cannot fail.
//!
//! By base16 convention `base00` is the editor background, `base05` the
//! default foreground, and `base08`/`base0B` the red-like/green-like
//! semantic accents — the four slots the diff-color logic relies on.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use b46_color::{Rgb, luminance};
use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::ThemeError;

/// The 16 required core-palette slot names, in canonical order.
pub const BASE16_KEYS: [&str; 16] = [
    "base00", "base01", "base02", "base03", "base04", "base05", "base06", "base07", "base08",
    "base09", "base0A", "base0B", "base0C", "base0D", "base0E", "base0F",
];

/// `M.type = "dark"` / `M.type = "light"` appearance marker.
static APPEARANCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"M\.type\s*=\s*["'](dark|light)["']"#).expect("appearance pattern compiles")
});

// ─── Appearance ──────────────────────────────────────────────────────────────

/// Whether a theme is dark- or light-background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Dark,
    Light,
}

impl Appearance {
    /// Read an explicit `M.type` appearance marker from theme source.
    ///
    /// Returns `None` when the theme does not declare one; callers fall
    /// back to [`infer`](Self::infer).
    #[must_use]
    pub fn from_marker(source: &str) -> Option<Self> {
        match APPEARANCE_RE.captures(source)?.get(1)?.as_str() {
            "light" => Some(Self::Light),
            _ => Some(Self::Dark),
        }
    }

    /// Infer the appearance from a validated palette: light iff the
    /// background is lighter than the foreground.
    #[must_use]
    pub fn infer(palette: &Base16Palette) -> Self {
        if luminance(palette.background()) > luminance(palette.foreground()) {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => f.write_str("dark"),
            Self::Light => f.write_str("light"),
        }
    }
}

// ─── Base16Palette ───────────────────────────────────────────────────────────

/// A complete, validated core palette.
///
/// Stored as a fixed array indexed by [`BASE16_KEYS`] order, so lookups
/// by slot are total and the palette serializes in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base16Palette {
    colors: [Rgb; 16],
}

impl Base16Palette {
    /// Build a palette from parsed table entries.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingBase16Keys`] naming *every* absent
    /// slot when the entries are incomplete.
    pub fn from_entries(entries: &BTreeMap<String, Rgb>) -> Result<Self, ThemeError> {
        let missing: Vec<String> = BASE16_KEYS
            .iter()
            .filter(|key| !entries.contains_key(**key))
            .map(|key| (*key).to_owned())
            .collect();
        if !missing.is_empty() {
            return Err(ThemeError::MissingBase16Keys { keys: missing });
        }

        let mut colors = [Rgb::BLACK; 16];
        for (slot, key) in BASE16_KEYS.iter().enumerate() {
            colors[slot] = entries[*key];
        }
        Ok(Self { colors })
    }

    /// Look up a slot by name. Returns `None` for non-base16 names.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Rgb> {
        let slot = BASE16_KEYS.iter().position(|k| *k == key)?;
        Some(self.colors[slot])
    }

    /// The editor background (`base00`).
    #[inline]
    #[must_use]
    pub const fn background(&self) -> Rgb {
        self.colors[0x00]
    }

    /// The default foreground (`base05`).
    #[inline]
    #[must_use]
    pub const fn foreground(&self) -> Rgb {
        self.colors[0x05]
    }

    /// The red-like semantic accent (`base08`).
    #[inline]
    #[must_use]
    pub const fn red_accent(&self) -> Rgb {
        self.colors[0x08]
    }

    /// The green-like semantic accent (`base0B`).
    #[inline]
    #[must_use]
    pub const fn green_accent(&self) -> Rgb {
        self.colors[0x0b]
    }

    /// Iterate slots in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Rgb)> + '_ {
        BASE16_KEYS.iter().zip(self.colors).map(|(key, color)| (*key, color))
    }
}

impl Serialize for Base16Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(16))?;
        for (key, color) in self.iter() {
            map.serialize_entry(key, &color)?;
        }
        map.end()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
