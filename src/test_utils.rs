//! Test utilities for imageops-cutout
//!
//! Synthetic sticker-like images for exercising the segmentation pipeline.
//! It is only compiled when running tests.

use image::Rgba;

use crate::Image;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const OUTLINE: Rgba<u8> = Rgba([40, 30, 30, 255]);
pub const SKIN: Rgba<u8> = Rgba([240, 200, 180, 255]);

/// Creates a test RGBA image with predefined pixel values for testing.
///
/// This function creates a 2x2 test image with known pixel values including alpha:
/// - (0,0): [200, 150, 100, 255] (opaque)
/// - (1,0): [100, 200, 150, 128] (semi-transparent)
/// - (0,1): [150, 100, 200, 64]  (more transparent)
/// - (1,1): [50, 75, 25, 0]      (fully transparent)
pub fn create_test_rgba_image() -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::new(2, 2);
    image.put_pixel(0, 0, Rgba([200, 150, 100, 255]));
    image.put_pixel(1, 0, Rgba([100, 200, 150, 128]));
    image.put_pixel(0, 1, Rgba([150, 100, 200, 64]));
    image.put_pixel(1, 1, Rgba([50, 75, 25, 0]));
    image
}

/// Creates an image filled with a single colour.
pub fn create_filled_image(width: u32, height: u32, color: Rgba<u8>) -> Image<Rgba<u8>> {
    Image::from_pixel(width, height, color)
}

/// Creates a white `size` x `size` canvas with a one-pixel square outline.
///
/// The outline runs from `margin` to `size - 1 - margin` on both axes and
/// both its inside and outside are white. With `with_gap`, the pixel at the
/// middle of the top edge is left white, opening the outline.
pub fn create_ring_image(size: u32, margin: u32, with_gap: bool) -> Image<Rgba<u8>> {
    let (low, high) = (margin, size - 1 - margin);
    let gap = (size / 2, low);

    Image::from_fn(size, size, |x, y| {
        let on_outline = ((x == low || x == high) && (low..=high).contains(&y))
            || ((y == low || y == high) && (low..=high).contains(&x));
        if on_outline && !(with_gap && (x, y) == gap) {
            OUTLINE
        } else {
            WHITE
        }
    })
}

/// Creates a white canvas with a solid subject block holding a small white
/// highlight at its centre.
///
/// The subject covers `margin..size - margin` on both axes; the highlight is
/// a `highlight` x `highlight` white square centred in it.
pub fn create_highlight_image(size: u32, margin: u32, highlight: u32) -> Image<Rgba<u8>> {
    let start = (size - highlight) / 2;
    let spot = start..start + highlight;
    let subject = margin..size - margin;

    Image::from_fn(size, size, |x, y| {
        if spot.contains(&x) && spot.contains(&y) {
            WHITE
        } else if subject.contains(&x) && subject.contains(&y) {
            SKIN
        } else {
            WHITE
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_test_rgba_image_with_valid_input_creates_image() {
        let image = create_test_rgba_image();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(0, 0), &Rgba([200, 150, 100, 255]));
        assert_eq!(image.get_pixel(1, 1), &Rgba([50, 75, 25, 0]));
    }

    #[test]
    fn create_ring_image_draws_outline_with_gap() {
        let closed = create_ring_image(11, 2, false);
        let open = create_ring_image(11, 2, true);

        assert_eq!(closed.get_pixel(2, 2), &OUTLINE);
        assert_eq!(closed.get_pixel(8, 8), &OUTLINE);
        assert_eq!(closed.get_pixel(5, 2), &OUTLINE);
        assert_eq!(closed.get_pixel(5, 5), &WHITE);
        assert_eq!(closed.get_pixel(0, 0), &WHITE);

        assert_eq!(open.get_pixel(5, 2), &WHITE);
        assert_eq!(open.get_pixel(4, 2), &OUTLINE);
    }

    #[test]
    fn create_highlight_image_places_spot_in_subject() {
        let image = create_highlight_image(20, 5, 3);
        assert_eq!(image.get_pixel(0, 0), &WHITE);
        assert_eq!(image.get_pixel(5, 5), &SKIN);
        assert_eq!(image.get_pixel(8, 8), &WHITE);
        assert_eq!(image.get_pixel(10, 10), &WHITE);
        assert_eq!(image.get_pixel(11, 11), &SKIN);
    }
}
