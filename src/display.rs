//! Rendering of a [`Time`] onto a chain of MAX7219 8x8 LED matrices.

use crate::font::{self, GLYPH_WIDTH};
use crate::time::Time;

/// Number of chained MAX7219 devices (FC16 module).
pub const DEVICES: usize = 4;

const COLUMNS: usize = DEVICES * 8;

/// Renders `time` as `HH:MM:SS` into one 8x8 buffer per device, device 0
/// being the leftmost matrix.
///
/// Each glyph is followed by a blank column. Characters that do not fit in the
/// 32 columns are dropped, which only happens for fields above 99.
pub fn render(time: &Time) -> [[u8; 8]; DEVICES] {
    let mut fb_rows = [0u32; 8];
    let mut cursor = 0;

    for c in time.format(true).chars() {
        if cursor + GLYPH_WIDTH > COLUMNS {
            break;
        }
        let Some(glyph) = font::glyph(c) else {
            continue;
        };
        for (row, &bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    fb_rows[row] |= 1 << (COLUMNS - 1 - (cursor + col));
                }
            }
        }
        cursor += GLYPH_WIDTH + 1;
    }

    let mut device_buffers = [[0u8; 8]; DEVICES];
    for (dev_idx, buffer) in device_buffers.iter_mut().enumerate() {
        let shift = COLUMNS - 8 * (dev_idx + 1);
        for (row, &bits) in fb_rows.iter().enumerate() {
            buffer[row] = (bits >> shift) as u8;
        }
    }

    device_buffers
}
