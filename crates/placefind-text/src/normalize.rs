use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Apostrophes and quotation marks, straight and curly.
const QUOTES: [char; 9] = [
    '\'', '"', '`', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{02BC}', '\u{00B4}',
];

fn is_dropped(c: char) -> bool {
    c == '-' || c.is_whitespace() || QUOTES.contains(&c)
}

/// Canonical comparison form of a place name or query.
///
/// Lowercases, strips diacritics, then drops hyphens, whitespace and quotes.
/// Not injective: "Abidjan", "abidjan" and "Abidjan " all map to "abidjan".
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c) && !is_dropped(*c))
        .collect()
}

/// Case- and accent-folded form that keeps word separators.
/// Primary collation key; see [`crate::collate`].
pub fn fold(text: &str) -> String {
    strip_marks(&text.to_lowercase())
}

pub(crate) fn strip_marks(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
