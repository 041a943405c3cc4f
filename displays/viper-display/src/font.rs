//! 5x7 glyphs for the score line
//!
//! Column-major, LSB at the top. Only the characters the score line
//! needs are present.

/// Pixel columns per glyph
pub const GLYPH_WIDTH: u8 = 5;

/// Horizontal advance between characters (glyph plus one blank column)
pub const CHAR_ADVANCE: u8 = GLYPH_WIDTH + 1;

const DIGITS: [[u8; 5]; 10] = [
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
];

const S: [u8; 5] = [0x26, 0x49, 0x49, 0x49, 0x32];
const C: [u8; 5] = [0x3E, 0x41, 0x41, 0x41, 0x22];
const O: [u8; 5] = [0x3E, 0x41, 0x41, 0x41, 0x3E];
const R: [u8; 5] = [0x7F, 0x09, 0x19, 0x29, 0x46];
const E: [u8; 5] = [0x7F, 0x49, 0x49, 0x49, 0x41];
const COLON: [u8; 5] = [0x00, 0x36, 0x36, 0x00, 0x00];

/// Look up the glyph for `c`, or `None` if the font has no such character
pub fn glyph(c: char) -> Option<&'static [u8; 5]> {
    match c {
        '0'..='9' => DIGITS.get((c as u8 - b'0') as usize),
        'S' => Some(&S),
        'C' => Some(&C),
        'O' => Some(&O),
        'R' => Some(&R),
        'E' => Some(&E),
        ':' => Some(&COLON),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_present() {
        for c in '0'..='9' {
            assert!(glyph(c).is_some(), "missing {c}");
        }
        assert_eq!(glyph('1'), Some(&[0x00, 0x42, 0x7F, 0x40, 0x00]));
    }

    #[test]
    fn test_label_characters() {
        for c in "SCORE:".chars() {
            assert!(glyph(c).is_some());
        }
    }

    #[test]
    fn test_unknown_characters() {
        assert_eq!(glyph('A'), None);
        assert_eq!(glyph(' '), None);
        assert_eq!(glyph('s'), None);
    }

    #[test]
    fn test_glyphs_fit_seven_rows() {
        for c in "0123456789SCORE:".chars() {
            let g = glyph(c).unwrap();
            assert!(g.iter().all(|col| col & 0x80 == 0));
        }
    }
}
