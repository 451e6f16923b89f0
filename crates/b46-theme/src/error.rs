//! Error types for theme loading and catalog assembly.
//!
//! Parsing itself never errors — missing tables and malformed lines are
//! soft failures absorbed by [`crate::table`]. Hard failures surface in
//! exactly two places: core-palette validation (per theme) and name
//! selection (per batch), and both report the complete list of offenders
//! rather than the first one found.

use thiserror::Error;

/// A fatal problem with a single theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The core palette is incomplete after reference resolution.
    /// Enumerates every absent slot, not just the first.
    #[error("missing base_16 keys: {}", .keys.join(", "))]
    MissingBase16Keys {
        /// The missing slot names, in canonical slot order.
        keys: Vec<String>,
    },
}

/// A fatal problem with a batch of themes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The caller requested theme names that are not among the inputs.
    /// Enumerates every unmatched name.
    #[error("unknown themes requested: {}", .names.join(", "))]
    UnknownThemes {
        /// The unmatched names, sorted.
        names: Vec<String>,
    },

    /// One theme failed to load; the batch is aborted.
    #[error("{name}: {error}")]
    Theme {
        /// The offending theme's name.
        name: String,
        /// What went wrong with it.
        #[source]
        error: ThemeError,
    },
}

// ─── Tests ───────────────────────────────────────────────────────────────────
