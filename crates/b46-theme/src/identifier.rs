//! Theme-name sanitizing — from display names to code identifiers.
//!
//! Theme files are named for humans (`One Dark`, `rosé-pine`, `256color`)
//! but the catalog also exposes each theme under a camelCase identifier
//! safe to use in generated code or as a lookup key.

/// Identifier used when a name contains no usable characters at all.
const FALLBACK: &str = "theme";

/// Turn an arbitrary theme name into a camelCase identifier.
///
/// Splits on runs of non-ASCII-alphanumeric characters, lowercases the
/// first fragment, capitalizes the first letter of each later fragment,
/// and joins without separators. Names that would start with a digit get
/// a `theme` prefix so the result is always a valid identifier.
///
/// # Examples
///
/// ```
/// use b46_theme::identifier::sanitize;
///
/// assert_eq!(sanitize("One Dark"), "oneDark");
/// assert_eq!(sanitize("gruvbox-dark"), "gruvboxDark");
/// assert_eq!(sanitize("256color"), "theme256color");
/// ```
#[must_use]
pub fn sanitize(name: &str) -> String {
    let mut fragments = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|fragment| !fragment.is_empty());

    let Some(first) = fragments.next() else {
        return FALLBACK.to_owned();
    };

    let mut identifier = first.to_ascii_lowercase();
    for fragment in fragments {
        identifier.push_str(&capitalize_first(fragment));
    }

    if identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier = format!("{FALLBACK}{}", capitalize_first(&identifier));
    }

    identifier
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_lowercased() {
        assert_eq!(sanitize("Gruvbox"), "gruvbox");
    }

    #[test]
    fn spaces_become_camel_case() {
        assert_eq!(sanitize("One Dark"), "oneDark");
    }

    #[test]
    fn hyphens_and_underscores_split() {
        assert_eq!(sanitize("gruvbox-dark_hard"), "gruvboxDarkHard");
    }

    #[test]
    fn later_fragments_keep_inner_case() {
        // Only the first letter of later fragments is touched.
        assert_eq!(sanitize("tokyo NIGHT"), "tokyoNIGHT");
    }

    #[test]
    fn leading_digit_gets_prefix() {
        let id = sanitize("256color");
        assert_eq!(id, "theme256color");
        assert!(!id.starts_with(|c: char| c.is_ascii_digit()));
    }

    #[test]
    fn digit_prefix_after_joining() {
        assert_eq!(sanitize("2 Spooky"), "theme2Spooky");
    }

    #[test]
    fn empty_name_falls_back() {
        assert_eq!(sanitize(""), "theme");
    }

    #[test]
    fn all_symbols_falls_back() {
        assert_eq!(sanitize("--- !!! ---"), "theme");
    }

    #[test]
    fn surrounding_separators_ignored() {
        assert_eq!(sanitize("  one dark  "), "oneDark");
    }
}
