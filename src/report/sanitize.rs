//! Character-set sanitization for the exported document
//!
//! The document is emitted in Latin-1. Symbols outside it are replaced by a
//! bracketed ASCII equivalent when one is known, otherwise by `?`.

/// Known symbol replacements
const REPLACEMENTS: &[(char, &str)] = &[
    ('\u{2705}', "[APPROVED]"),  // check mark
    ('\u{1F6A8}', "[ALERT]"),    // rotating light
    ('\u{1F4B0}', "[$]"),        // money bag
    ('\u{1F402}', "[LOT]"),      // ox
    ('\u{1F4CA}', "[CHART]"),    // bar chart
    ('\u{1F4CB}', "[REPORT]"),   // clipboard
    ('\u{1F4DD}', "[NOTE]"),     // memo
    ('\u{2014}', "-"),
    ('\u{2013}', "-"),
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{2026}', "..."),
];

/// Emoji presentation selector, dropped silently
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Replace every character outside Latin-1
pub fn sanitize_latin1(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if u32::from(ch) <= 0xFF {
            out.push(ch);
        } else if ch == VARIATION_SELECTOR {
            continue;
        } else if let Some((_, replacement)) = REPLACEMENTS.iter().find(|(c, _)| *c == ch) {
            out.push_str(replacement);
        } else {
            out.push('?');
        }
    }
    out
}

/// Encode already-sanitized text as Latin-1 bytes
///
/// Characters above U+00FF are written as `?`, so unsanitized input never
/// produces invalid output.
pub fn to_latin1_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| u8::try_from(u32::from(ch)).unwrap_or(b'?'))
        .collect()
}
