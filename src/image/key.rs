//! Near-white transparency key.

use image::{Rgba, RgbaImage};

/// Channels strictly above this value count as white.
pub const WHITE_THRESHOLD: u8 = 240;

/// Replacement for keyed pixels.
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Apply the key to a single pixel.
///
/// A pixel whose red, green and blue channels all exceed
/// [`WHITE_THRESHOLD`] becomes [`TRANSPARENT_WHITE`]. Anything else,
/// alpha included, passes through untouched.
#[inline]
#[must_use]
pub fn key_pixel(pixel: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, _] = pixel.0;
    if r > WHITE_THRESHOLD && g > WHITE_THRESHOLD && b > WHITE_THRESHOLD {
        TRANSPARENT_WHITE
    } else {
        pixel
    }
}

/// Key every near-white pixel of `img` to transparent white, in place.
///
/// Returns the number of pixels that matched the key.
pub fn apply_transparency_key(img: &mut RgbaImage) -> usize {
    let mut keyed = 0;

    for pixel in img.pixels_mut() {
        let out = key_pixel(*pixel);
        if out == TRANSPARENT_WHITE {
            keyed += 1;
        }
        *pixel = out;
    }

    keyed
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};

    #[test]
    fn test_key_pixel_threshold_is_exclusive() {
        assert_eq!(key_pixel(Rgba([241, 241, 241, 255])), TRANSPARENT_WHITE);
        assert_eq!(key_pixel(Rgba([240, 255, 255, 255])), Rgba([240, 255, 255, 255]));
        assert_eq!(key_pixel(Rgba([255, 240, 255, 7])), Rgba([255, 240, 255, 7]));
        assert_eq!(key_pixel(Rgba([255, 255, 240, 128])), Rgba([255, 255, 240, 128]));
    }

    #[test]
    fn test_key_ignores_existing_alpha() {
        assert_eq!(key_pixel(Rgba([250, 250, 250, 3])), TRANSPARENT_WHITE);
        assert_eq!(key_pixel(Rgba([0, 0, 0, 0])), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_two_by_two_rgb_source() {
        let mut rgb = RgbImage::new(2, 2);
        rgb.put_pixel(0, 0, Rgb([255, 255, 255]));
        rgb.put_pixel(1, 0, Rgb([250, 248, 245]));
        rgb.put_pixel(0, 1, Rgb([10, 10, 10]));
        rgb.put_pixel(1, 1, Rgb([0, 0, 0]));

        let mut rgba = DynamicImage::ImageRgb8(rgb).to_rgba8();
        let keyed = apply_transparency_key(&mut rgba);

        assert_eq!(keyed, 2);
        assert_eq!(rgba.get_pixel(0, 0).0, [255, 255, 255, 0]);
        assert_eq!(rgba.get_pixel(1, 0).0, [255, 255, 255, 0]);
        assert_eq!(rgba.get_pixel(0, 1).0, [10, 10, 10, 255]);
        assert_eq!(rgba.get_pixel(1, 1).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_key_is_idempotent() {
        let mut img = RgbaImage::from_fn(16, 16, |x, y| {
            // Sweep across the threshold on every channel.
            let v = (230 + x + y) as u8;
            Rgba([v, v.saturating_sub(1), 255, (x * 16) as u8])
        });

        apply_transparency_key(&mut img);
        let once = img.clone();
        apply_transparency_key(&mut img);

        assert_eq!(img, once);
    }
}
