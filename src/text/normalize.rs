//! Numeral normalization for value text.

const ARABIC_ZERO: u32 = 0x0660;
const ARABIC_NINE: u32 = 0x0669;
const ARABIC_DECIMAL_SEPARATOR: char = '\u{060C}';

/// Rewrites Arabic-indic digits (٠–٩) to their decimal equivalents and the
/// Arabic decimal separator `،` to `.`. All other characters pass through.
pub fn normalize_numerals(text: &str) -> String {
    text.chars()
        .map(|ch| {
            let code = ch as u32;
            if (ARABIC_ZERO..=ARABIC_NINE).contains(&code) {
                char::from(b'0' + (code - ARABIC_ZERO) as u8)
            } else if ch == ARABIC_DECIMAL_SEPARATOR {
                '.'
            } else {
                ch
            }
        })
        .collect()
}
