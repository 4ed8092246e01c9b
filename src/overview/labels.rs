//! Built-in glyph strip for contact-sheet labels

use image::{Rgba, RgbaImage};

/// Glyph width in pixels before scaling
pub const GLYPH_W: u32 = 3;
/// Glyph height in pixels before scaling
pub const GLYPH_H: u32 = 5;
/// Horizontal advance per glyph before scaling
pub const GLYPH_ADVANCE: u32 = GLYPH_W + 1;

// Row bitmaps, top to bottom, bit 2 = leftmost pixel. Labels only ever
// hold digits, parentheses, commas, and spaces; anything else is blank.
const fn glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '(' => [0b001, 0b010, 0b010, 0b010, 0b001],
        ')' => [0b100, 0b010, 0b010, 0b010, 0b100],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        _ => [0b000; 5],
    }
}

/// Unscaled pixel width of a rendered label
pub fn text_width(text: &str) -> u32 {
    text.chars().count() as u32 * GLYPH_ADVANCE
}

/// Draw `text` with its top-left at (x, y), each glyph pixel scaled to a
/// square of `scale`
///
/// Unknown characters render as blanks. Drawing clips at the canvas
/// edges instead of panicking.
pub fn draw_text(
    canvas: &mut RgbaImage,
    text: &str,
    x: u32,
    y: u32,
    scale: u32,
    color: Rgba<u8>,
) {
    let mut pen_x = x;
    for c in text.chars() {
        let rows = glyph(c);
        for (gy, row) in rows.iter().enumerate() {
            for gx in 0..GLYPH_W {
                if row & (0b100 >> gx) != 0 {
                    fill_square(canvas, pen_x + gx * scale, y + gy as u32 * scale, scale, color);
                }
            }
        }
        pen_x += GLYPH_ADVANCE * scale;
    }
}

fn fill_square(canvas: &mut RgbaImage, x: u32, y: u32, size: u32, color: Rgba<u8>) {
    for py in y..y + size {
        for px in x..x + size {
            if let Some(pixel) = canvas.get_pixel_mut_checked(px, py) {
                *pixel = color;
            }
        }
    }
}
