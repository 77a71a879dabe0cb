//! Character classification for word boundaries and line-edge trimming.
//!
//! Two fixed, literal alphabets: the delimiter set that terminates a word,
//! and the whitespace-or-invisible set used to trim the edges of a resolved
//! line. Both are total over `char` and carry no locale dependence.

/// Whether `ch` terminates a word.
pub fn is_delimiter(ch: char) -> bool {
    match ch {
        // Bracketing and joining punctuation
        '_' | '/' | '(' | ')' | '{' | '}' | '[' | ']' => true,
        // Clause punctuation
        ',' | '.' | ':' | ';' | '?' | '!' => true,
        // Hyphen-minus, the Unicode dash block, and the minus sign
        '-' | '\u{2010}'..='\u{2015}' | '\u{2212}' => true,
        // Horizontal ellipsis
        '\u{2026}' => true,
        ch => ch.is_whitespace(),
    }
}

/// Whether `ch` can be part of a word.
pub fn is_word_char(ch: char) -> bool {
    !is_delimiter(ch)
}

/// Whether `ch` is whitespace or an invisible format control.
///
/// Used only by the line resolver: a resolved line is trimmed so it never
/// starts or ends on one of these.
pub fn is_whitespace_or_zero_width(ch: char) -> bool {
    match ch {
        // Zero-width space, non-joiner, joiner, word joiner, ZWNBSP/BOM
        '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}' => true,
        // Soft hyphen
        '\u{00AD}' => true,
        // Directional marks
        '\u{200E}' | '\u{200F}' | '\u{061C}' => true,
        // Directional embeddings/overrides and isolates
        '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}' => true,
        ch => ch.is_whitespace(),
    }
}
