/// Width of every glyph in columns.
pub const GLYPH_WIDTH: usize = 3;

/// 3x5 glyphs on an 8 row grid, drawn in rows 1 to 5.
/// Bit 2 of a row is the leftmost column.
const DIGITS: [[u8; 8]; 10] = [
    [0, 0b111, 0b101, 0b101, 0b101, 0b111, 0, 0],
    [0, 0b010, 0b110, 0b010, 0b010, 0b111, 0, 0],
    [0, 0b111, 0b001, 0b111, 0b100, 0b111, 0, 0],
    [0, 0b111, 0b001, 0b111, 0b001, 0b111, 0, 0],
    [0, 0b101, 0b101, 0b111, 0b001, 0b001, 0, 0],
    [0, 0b111, 0b100, 0b111, 0b001, 0b111, 0, 0],
    [0, 0b111, 0b100, 0b111, 0b101, 0b111, 0, 0],
    [0, 0b111, 0b001, 0b001, 0b001, 0b001, 0, 0],
    [0, 0b111, 0b101, 0b111, 0b101, 0b111, 0, 0],
    [0, 0b111, 0b101, 0b111, 0b001, 0b111, 0, 0],
];

const COLON: [u8; 8] = [0, 0, 0b010, 0, 0b010, 0, 0, 0];

pub fn glyph(c: char) -> Option<&'static [u8; 8]> {
    match c {
        '0'..='9' => Some(&DIGITS[c as usize - '0' as usize]),
        ':' => Some(&COLON),
        _ => None,
    }
}
