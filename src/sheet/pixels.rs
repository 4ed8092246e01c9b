//! Pixel predicates and rewrites shared by slicing and edge inference

use image::{Rgba, RgbaImage};

/// Whether a pixel participates in edge patterns
///
/// A pixel is foreground iff it is not fully transparent and its color is
/// not pure white (`#ffffff`). This one rule backs both blank-tile
/// detection during slicing and border binarization during edge-match
/// inference, so the two stages always agree on what counts as content.
pub const fn is_foreground(pixel: Rgba<u8>) -> bool {
    let Rgba([r, g, b, a]) = pixel;
    a != 0 && !(r == 255 && g == 255 && b == 255)
}

/// Zero the alpha of every opaque pure-white pixel in place
///
/// Only exact `#ffffff` is rewritten; the color channels are left alone
/// so the change is limited to transparency.
pub fn white_to_transparent(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        if a != 0 && r == 255 && g == 255 && b == 255 {
            *pixel = Rgba([255, 255, 255, 0]);
        }
    }
}

/// Whether a tile holds no content worth keeping
///
/// When white has been made transparent, empty means every pixel is fully
/// transparent. Otherwise empty means every pixel's color is pure white,
/// whatever its alpha.
pub fn is_empty(image: &RgbaImage, white_is_transparent: bool) -> bool {
    if white_is_transparent {
        image.pixels().all(|&Rgba([_, _, _, a])| a == 0)
    } else {
        image
            .pixels()
            .all(|&Rgba([r, g, b, _])| r == 255 && g == 255 && b == 255)
    }
}
