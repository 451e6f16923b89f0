//! Batch selection and loading — many named sources, one catalog.
//!
//! The caller hands in an ordered list of `(name, source)` pairs (file
//! discovery is its business, not ours) plus a selection. Output order
//! is input order; themes never share state, so a failure in one cannot
//! corrupt another.

use tracing::debug;

use crate::error::CatalogError;
use crate::loader::{LoaderConfig, ThemeRecord, load_theme};

/// One named theme source: the raw text of a single theme file.
#[derive(Debug, Clone)]
pub struct ThemeSource {
    /// Theme name (conventionally the source file stem).
    pub name: String,
    /// The theme's full source text.
    pub source: String,
}

/// Which of the available themes to load.
#[derive(Debug, Clone)]
pub enum Selection {
    /// Every theme found, in input order.
    All,
    /// Only the named themes, still in input order.
    Names(Vec<String>),
}

/// Filter `sources` down to the selection, preserving input order.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownThemes`] listing every requested name
/// with no matching source — fatal for the batch.
pub fn select<'a>(
    sources: &'a [ThemeSource],
    selection: &Selection,
) -> Result<Vec<&'a ThemeSource>, CatalogError> {
    let Selection::Names(names) = selection else {
        return Ok(sources.iter().collect());
    };

    let selected: Vec<&ThemeSource> = sources
        .iter()
        .filter(|theme| names.iter().any(|name| *name == theme.name))
        .collect();

    let mut unknown: Vec<String> = names
        .iter()
        .filter(|name| !sources.iter().any(|theme| theme.name == **name))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        unknown.sort_unstable();
        return Err(CatalogError::UnknownThemes { names: unknown });
    }

    Ok(selected)
}

/// Load every selected theme into an ordered catalog.
///
/// Aborts on the first theme that fails validation; callers that prefer
/// to skip broken themes can drive [`select`] and
/// [`load_theme`](crate::loader::load_theme) themselves.
///
/// # Errors
///
/// [`CatalogError::UnknownThemes`] for unmatched requested names, or
/// [`CatalogError::Theme`] wrapping the first per-theme failure.
pub fn build_catalog(
    sources: &[ThemeSource],
    selection: &Selection,
    config: &LoaderConfig,
) -> Result<Vec<ThemeRecord>, CatalogError> {
    let selected = select(sources, selection)?;
    debug!(total = sources.len(), selected = selected.len(), "building catalog");

    selected
        .into_iter()
        .map(|theme| {
            load_theme(&theme.name, &theme.source, config).map_err(|error| {
                CatalogError::Theme { name: theme.name.clone(), error }
            })
        })
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use crate::palette::BASE16_KEYS;

    fn theme_source(name: &str, background: &str) -> ThemeSource {
        let mut source = String::from("M.base_16 = {\n");
        for key in BASE16_KEYS {
            let literal = match key {
                "base00" => background,
                "base05" => "#d8dee9",
                _ => "#556677",
            };
            source.push_str(&format!("  {key} = \"{literal}\",\n"));
        }
        source.push_str("}\n");
        ThemeSource { name: name.to_owned(), source }
    }

    fn fixtures() -> Vec<ThemeSource> {
        vec![
            theme_source("aurora", "#10141a"),
            theme_source("ember", "#1a1410"),
            theme_source("tide", "#0e1418"),
        ]
    }

    #[test]
    fn select_all_preserves_order() {
        let sources = fixtures();
        let selected = select(&sources, &Selection::All).unwrap();
        let names: Vec<&str> = selected.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["aurora", "ember", "tide"]);
    }

    #[test]
    fn select_subset_keeps_input_order() {
        let sources = fixtures();
        // Requested out of order — output follows input order.
        let selection = Selection::Names(vec!["tide".to_owned(), "aurora".to_owned()]);
        let selected = select(&sources, &selection).unwrap();
        let names: Vec<&str> = selected.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["aurora", "tide"]);
    }

    #[test]
    fn unknown_names_all_reported() {
        let sources = fixtures();
        let selection = Selection::Names(vec![
            "zzz".to_owned(),
            "aurora".to_owned(),
            "abc".to_owned(),
        ]);
        let err = select(&sources, &selection).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownThemes { names: vec!["abc".to_owned(), "zzz".to_owned()] }
        );
    }

    #[test]
    fn build_catalog_loads_in_order() {
        let sources = fixtures();
        let catalog =
            build_catalog(&sources, &Selection::All, &LoaderConfig::default()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].name, "aurora");
        assert_eq!(catalog[2].name, "tide");
    }

    #[test]
    fn build_catalog_wraps_theme_failures() {
        let mut sources = fixtures();
        sources[1].source = "M.base_16 = {\n}\n".to_owned();
        let err =
            build_catalog(&sources, &Selection::All, &LoaderConfig::default()).unwrap_err();
        let CatalogError::Theme { name, error } = err else {
            panic!("expected per-theme error, got {err:?}");
        };
        assert_eq!(name, "ember");
        let ThemeError::MissingBase16Keys { keys } = error;
        assert_eq!(keys.len(), 16);
    }

    #[test]
    fn independent_themes_unaffected_by_failure() {
        // Loading the broken theme directly fails, but loading its
        // neighbors individually still succeeds.
        let mut sources = fixtures();
        sources[1].source = String::new();
        let config = LoaderConfig::default();
        assert!(load_theme("ember", &sources[1].source, &config).is_err());
        assert!(load_theme("aurora", &sources[0].source, &config).is_ok());
        assert!(load_theme("tide", &sources[2].source, &config).is_ok());
    }
}
