//! Line-oriented color-table extraction.
//!
//! Base46 theme sources are Lua modules, but this is not a Lua parser —
//! it is a narrow extractor for the one shape the themes use:
//!
//! ```text
//! M.base_30 = {
//!   white = "#abb2bf",
//!   darker_black = "#1b1f27",
//!   ...
//! }
//! ```
//!
//! Entries are either hex literals or references into another table
//! (`base0B = M.base_30.green`). References are resolved against an
//! *already fully parsed* table injected by the caller, never against
//! partial state, so declaration order inside a table is irrelevant.
//!
//! Soft-failure contract: a missing table yields an empty mapping, and
//! lines matching neither pattern (comments, nested keys, arithmetic)
//! are skipped silently. Callers decide what emptiness means; palette
//! validation is the sole enforcement point.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use b46_color::Rgb;
use regex::Regex;

/// `key = "#rrggbb"` — quotes and the `#` are both optional.
static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z0-9_]+)\s*=\s*["']?#?([0-9a-fA-F]{6})["']?"#)
        .expect("entry pattern compiles")
});

/// `key = some.dotted.path` — candidate reference, resolved by prefix.
static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9_]+)\s*=\s*([A-Za-z0-9_.]+)").expect("reference pattern compiles")
});

/// A closing `}`, optionally followed by a comma.
static CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\}\s*,?\s*$").expect("close pattern compiles"));

/// A previously parsed table to resolve symbolic references against.
#[derive(Clone, Copy)]
pub struct References<'a> {
    /// The fully parsed table the references point into.
    pub entries: &'a BTreeMap<String, Rgb>,
    /// The textual prefix a reference carries, e.g. `M.base_30.`.
    pub prefix: &'a str,
}

/// Extract the `identifier -> color` entries of one named table.
///
/// Scans `source` for the line opening `table_name = {`, then reads
/// entries until the closing `}`. Returns an empty mapping when the
/// table is absent — a soft failure by design, since a theme may
/// legitimately omit a table and validation happens later.
///
/// When `references` is supplied, lines of the form
/// `identifier = <prefix><other>` copy the already-resolved color of
/// `other`; unresolvable references are skipped like any other
/// unrecognized line.
#[must_use]
pub fn parse_table(
    source: &str,
    table_name: &str,
    references: Option<References<'_>>,
) -> BTreeMap<String, Rgb> {
    let mut entries = BTreeMap::new();

    let mut lines = source.lines();
    if !lines.any(|line| is_table_open(line, table_name)) {
        return entries;
    }

    // `lines` now yields the table body; stop at the closing brace.
    for line in lines.take_while(|line| !CLOSE_RE.is_match(line)) {
        if let Some(caps) = ENTRY_RE.captures(line) {
            if let Some(color) = Rgb::hex(&caps[2]) {
                entries.insert(caps[1].to_owned(), color);
            }
            continue;
        }
        let Some(refs) = references else { continue };
        if let Some(caps) = REFERENCE_RE.captures(line) {
            let Some(target) = caps[2].strip_prefix(refs.prefix) else {
                continue;
            };
            if let Some(&color) = refs.entries.get(target) {
                entries.insert(caps[1].to_owned(), color);
            }
        }
    }

    entries
}

/// Whether a line declares the start of `table_name`'s body:
/// the name, `=`, and an opening `{`, with arbitrary spacing.
fn is_table_open(line: &str, table_name: &str) -> bool {
    let Some(idx) = line.find(table_name) else {
        return false;
    };
    let rest = line[idx + table_name.len()..].trim_start();
    match rest.strip_prefix('=') {
        Some(rest) => rest.trim_start().starts_with('{'),
        None => false,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(value: u32) -> Rgb {
        Rgb::from_u32(value)
    }

    const SAMPLE: &str = r##"
local M = {}

M.base_30 = {
  white = "#abb2bf",
  green1 = "#00ff00",
  red = '#e06c75',
  -- a comment inside the table
  one_bg = "#282c34",
}

M.base_16 = {
  base00 = "#1e222a",
  base05 = "#abb2bf",
  base0B = M.base_30.green1,
}

M.type = "dark"

return M
"##;

    // ── Literal entries ──────────────────────────────────────────────────

    #[test]
    fn parses_literal_entries() {
        let table = parse_table(SAMPLE, "M.base_30", None);
        assert_eq!(table.get("white"), Some(&rgb(0xabb2bf)));
        assert_eq!(table.get("green1"), Some(&rgb(0x00ff00)));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn accepts_single_quotes() {
        let table = parse_table(SAMPLE, "M.base_30", None);
        assert_eq!(table.get("red"), Some(&rgb(0xe06c75)));
    }

    #[test]
    fn accepts_unquoted_and_hashless() {
        let source = "t = {\n  a = #112233\n  b = 445566\n}\n";
        let table = parse_table(source, "t", None);
        assert_eq!(table.get("a"), Some(&rgb(0x112233)));
        assert_eq!(table.get("b"), Some(&rgb(0x445566)));
    }

    // ── References ───────────────────────────────────────────────────────

    #[test]
    fn resolves_references_against_parsed_table() {
        let base30 = parse_table(SAMPLE, "M.base_30", None);
        let refs = References { entries: &base30, prefix: "M.base_30." };
        let base16 = parse_table(SAMPLE, "M.base_16", Some(refs));
        assert_eq!(base16.get("base0B"), Some(&rgb(0x00ff00)));
        assert_eq!(base16.get("base00"), Some(&rgb(0x1e222a)));
    }

    #[test]
    fn skips_reference_to_unknown_key() {
        let base30 = BTreeMap::new();
        let refs = References { entries: &base30, prefix: "M.base_30." };
        let source = "M.base_16 = {\n  base0B = M.base_30.green1,\n}\n";
        let base16 = parse_table(source, "M.base_16", Some(refs));
        assert!(base16.is_empty());
    }

    #[test]
    fn references_ignored_without_reference_table() {
        let base16 = parse_table(SAMPLE, "M.base_16", None);
        assert!(!base16.contains_key("base0B"));
        assert_eq!(base16.len(), 2);
    }

    #[test]
    fn reference_order_does_not_matter() {
        // The alias appears before any base_30 declaration in the text;
        // it still resolves because references come pre-parsed.
        let source = "\
M.base_16 = {
  base0B = M.base_30.green1,
}
M.base_30 = {
  green1 = \"#00ff00\",
}
";
        let base30 = parse_table(source, "M.base_30", None);
        let refs = References { entries: &base30, prefix: "M.base_30." };
        let base16 = parse_table(source, "M.base_16", Some(refs));
        assert_eq!(base16.get("base0B"), Some(&rgb(0x00ff00)));
    }

    // ── Boundaries and soft failures ─────────────────────────────────────

    #[test]
    fn missing_table_is_empty() {
        assert!(parse_table(SAMPLE, "M.base_99", None).is_empty());
    }

    #[test]
    fn stops_at_closing_brace() {
        // base_16 entries must not leak into the base_30 scan.
        let table = parse_table(SAMPLE, "M.base_30", None);
        assert!(!table.contains_key("base00"));
    }

    #[test]
    fn close_with_trailing_comma() {
        let source = "t = {\n  a = \"#112233\",\n},\nb = \"#445566\"\n";
        let table = parse_table(source, "t", None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn skips_malformed_lines_silently() {
        let source = "t = {\n  a = \"#112233\",\n  b = 12,\n  nested = { x = 1 },\n  c = \"#abcdef\",\n}\n";
        let table = parse_table(source, "t", None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("c"), Some(&rgb(0xabcdef)));
    }

    #[test]
    fn open_marker_requires_equals_and_brace() {
        let source = "-- mentions t here\nt = {\n  a = \"#112233\",\n}\n";
        let table = parse_table(source, "t", None);
        assert_eq!(table.len(), 1);
    }
}
