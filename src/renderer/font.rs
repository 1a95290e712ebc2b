//! 5x7 bitmap font
//!
//! Glyph rows run top to bottom; bit 4 is the leftmost column. Lowercase is
//! drawn as uppercase; anything without a glyph advances like a space.

use glam::Vec2;

use super::shapes::push_quad;
use super::vertex::{Color, Vertex};

const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: usize = 7;
/// Columns advanced per character (glyph plus one column of spacing)
const ADVANCE_COLS: f32 = 6.0;

type Glyph = [u8; GLYPH_ROWS];

fn glyph(c: char) -> Option<Glyph> {
    let rows = match c.to_ascii_uppercase() {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        _ => return None,
    };
    Some(rows)
}

/// Horizontal extent of `text` at the given cap height
pub fn text_width(text: &str, size: f32) -> f32 {
    let count = text.chars().count() as f32;
    if count == 0.0 {
        return 0.0;
    }
    let px = size / GLYPH_ROWS as f32;
    // No trailing spacing column after the last glyph
    (count * ADVANCE_COLS - 1.0) * px
}

/// Tessellate `text` with its left end at `origin.x` and its baseline at
/// `origin.y`; `size` is the cap height in pixels
pub fn text(text: &str, origin: Vec2, size: f32, color: Color) -> Vec<Vertex> {
    let px = size / GLYPH_ROWS as f32;
    let top = origin.y - size;
    let mut vertices = Vec::new();

    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else { continue };
        let left = origin.x + i as f32 * ADVANCE_COLS * px;

        for (row, bits) in rows.iter().enumerate() {
            let y = top + row as f32 * px;
            // Merge runs of lit pixels into one quad
            let mut col = 0;
            while col < GLYPH_COLS {
                if bits & (0x10 >> col) == 0 {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_COLS && bits & (0x10 >> col) != 0 {
                    col += 1;
                }
                push_quad(
                    &mut vertices,
                    Vec2::new(left + start as f32 * px, y),
                    Vec2::new(left + col as f32 * px, y + px),
                    color,
                );
            }
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = [1.0; 4];

    #[test]
    fn test_digits_and_letters_have_glyphs() {
        for c in "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ!-".chars() {
            assert!(glyph(c).is_some(), "missing glyph {c}");
        }
        assert_eq!(glyph('a'), glyph('A'));
        assert!(glyph(' ').is_none());
    }

    #[test]
    fn test_one_is_drawn_in_runs() {
        // "1": rows are single pixels except the 3-wide base => 7 quads
        let v = text("1", Vec2::new(0.0, 70.0), 70.0, WHITE);
        assert_eq!(v.len(), 7 * 6);
    }

    #[test]
    fn test_text_sits_on_baseline() {
        let v = text("8", Vec2::new(100.0, 50.0), 35.0, WHITE);
        let min_y = v.iter().map(|v| v.position[1]).fold(f32::MAX, f32::min);
        let max_y = v.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert!((min_y - 15.0).abs() < 1e-4);
        assert!((max_y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 14.0), 0.0);
        assert_eq!(text_width("A", 14.0), 10.0);
        assert_eq!(text_width("AB", 14.0), 22.0);
    }
}
