//! Per-theme orchestration — from one source blob to one `ThemeRecord`.
//!
//! The pipeline for a single theme is linear and allocation-local:
//! parse the extended table, parse the core table against it, validate,
//! resolve appearance, pick and adjust the two diff backgrounds, and
//! assemble the record. Nothing is shared between themes.

use std::collections::BTreeMap;

use b46_color::Rgb;
use serde::Serialize;
use tracing::debug;

use crate::contrast::adjust_background;
use crate::error::ThemeError;
use crate::identifier::sanitize;
use crate::palette::{Appearance, Base16Palette};
use crate::table::{References, parse_table};

/// Name of the extended-palette table in theme sources.
const BASE30_TABLE: &str = "M.base_30";

/// Name of the core-palette table in theme sources.
const BASE16_TABLE: &str = "M.base_16";

/// Prefix a core-table entry uses to alias an extended-palette slot.
const BASE30_REF_PREFIX: &str = "M.base_30.";

// ─── LoaderConfig ────────────────────────────────────────────────────────────

/// Tunables for theme loading.
///
/// The contrast target and the candidate slot lists are parameters, not
/// embedded constants, so the engine can be exercised with arbitrary
/// targets and palettes. [`LoaderConfig::default`] gives the production
/// values.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Contrast ratio each diff background must reach against the
    /// default foreground. 4.0 is a deliberate readability floor,
    /// independent of the theme's own palette choices.
    pub target_contrast: f64,

    /// Extended-palette slots tried in order for the added-lines
    /// background; `base0B` is the fallback when none exist.
    pub added_candidates: Vec<String>,

    /// Extended-palette slots tried in order for the removed-lines
    /// background; `base08` is the fallback when none exist.
    pub removed_candidates: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            target_contrast: 4.0,
            added_candidates: ["soft_green", "green1", "green", "vibrant_green"]
                .map(str::to_owned)
                .to_vec(),
            removed_candidates: ["tintred", "firered", "red", "brownred"]
                .map(str::to_owned)
                .to_vec(),
        }
    }
}

// ─── ThemeRecord ─────────────────────────────────────────────────────────────

/// One fully-resolved theme, ready for catalog emission.
///
/// Immutable after construction; every field is a self-contained value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    /// The theme's raw name (usually the source file stem).
    pub name: String,
    /// Sanitized camelCase identifier derived from the name.
    pub identifier: String,
    /// Dark or light, declared or inferred.
    pub appearance: Appearance,
    /// The validated 16-slot core palette.
    pub base16: Base16Palette,
    /// The extended palette, sorted by slot name.
    pub base30: BTreeMap<String, Rgb>,
    /// Added-lines diff background, contrast-adjusted.
    pub diff_added_background: Rgb,
    /// Removed-lines diff background, contrast-adjusted.
    pub diff_removed_background: Rgb,
}

// ─── Loading ─────────────────────────────────────────────────────────────────

/// Load one theme from its source text.
///
/// # Errors
///
/// Returns [`ThemeError::MissingBase16Keys`] when the core palette is
/// incomplete after reference resolution, naming every missing slot.
pub fn load_theme(name: &str, source: &str, config: &LoaderConfig) -> Result<ThemeRecord, ThemeError> {
    let base30 = parse_table(source, BASE30_TABLE, None);
    let base16_entries = parse_table(
        source,
        BASE16_TABLE,
        Some(References { entries: &base30, prefix: BASE30_REF_PREFIX }),
    );
    let base16 = Base16Palette::from_entries(&base16_entries)?;

    // Explicit marker wins; inference needs base00/base05, which the
    // validated palette guarantees.
    let appearance =
        Appearance::from_marker(source).unwrap_or_else(|| Appearance::infer(&base16));

    let added = pick_color(&base30, &config.added_candidates, base16.green_accent());
    let removed = pick_color(&base30, &config.removed_candidates, base16.red_accent());

    let diff_added_background = adjust_background(
        added,
        base16.foreground(),
        base16.background(),
        config.target_contrast,
    );
    let diff_removed_background = adjust_background(
        removed,
        base16.foreground(),
        base16.background(),
        config.target_contrast,
    );

    debug!(
        name,
        %appearance,
        base30_slots = base30.len(),
        %diff_added_background,
        %diff_removed_background,
        "loaded theme"
    );

    Ok(ThemeRecord {
        name: name.to_owned(),
        identifier: sanitize(name),
        appearance,
        base16,
        base30,
        diff_added_background,
        diff_removed_background,
    })
}

/// First candidate present in `entries`, else `fallback`.
fn pick_color(entries: &BTreeMap<String, Rgb>, candidates: &[String], fallback: Rgb) -> Rgb {
    candidates
        .iter()
        .find_map(|key| entries.get(key).copied())
        .unwrap_or(fallback)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
