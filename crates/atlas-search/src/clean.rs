//! Name canonicalization.

/// Clean a name for prefix matching: keep ASCII letters and spaces,
/// lower-case the letters, drop everything else.
///
/// `"Peet's Coffee & Tea"` → `"peets coffee  tea"`.  Cleaning is applied to
/// both stored names and query strings, so punctuation and case never
/// affect matching.
pub fn clean(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
