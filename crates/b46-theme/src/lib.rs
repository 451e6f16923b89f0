//! # b46-theme — base46 theme parsing and adjustment engine
//!
//! Turns NvChad base46 theme sources (Lua files defining an `M.base_30`
//! extended palette, an `M.base_16` core palette, and an optional
//! `M.type` appearance tag) into validated, self-contained theme records
//! for syntax/diff highlighting.
//!
//! # Architecture
//!
//! ```text
//! theme source text (one blob per theme)
//!     │
//!     ▼
//! table.rs:      extract base_30, then base_16 with base_30 as references
//!     │
//!     ▼
//! palette.rs:    validate the 16 core slots, resolve dark/light
//!     │
//!     ▼
//! contrast.rs:   adjust diff backgrounds to the target contrast ratio
//!     │
//!     ▼
//! loader.rs:     assemble the immutable ThemeRecord
//!     │
//!     ▼
//! catalog.rs:    select and load a batch of named themes in order
//! ```
//!
//! Each theme is processed independently — no state is shared between
//! themes, and nothing here performs I/O. Callers hand in source text and
//! get back values.
//!
//! # Failure model
//!
//! Parsing is deliberately soft: a missing table yields an empty mapping
//! and unrecognized lines are skipped, so that validation is the single
//! enforcement point. Validation reports *every* missing core slot, not
//! just the first. An unreachable contrast target is not an error at all;
//! the adjuster degrades to the theme background and logs a warning.

pub mod catalog;
pub mod contrast;
pub mod error;
pub mod identifier;
pub mod loader;
pub mod palette;
pub mod table;

pub use catalog::{Selection, ThemeSource, build_catalog};
pub use error::{CatalogError, ThemeError};
pub use loader::{LoaderConfig, ThemeRecord, load_theme};
pub use palette::{Appearance, BASE16_KEYS, Base16Palette};
