use image::{GenericImageView, Luma, Rgba};
use imageproc::map::map_colors2;

use crate::error::{Error, Result};
use crate::imageops_cutout::pixel_mask::PixelMask;
use crate::utils::validate_matching_dimensions;
use crate::Image;

/// Colour written to every removed pixel: fully transparent white.
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Trait for writing a removal mask into an RGBA image's alpha channel
///
/// Pixels in the mask become [`TRANSPARENT_WHITE`]. Every other pixel is
/// kept as-is, including its original alpha.
pub trait ApplyRemovalMask {
    /// Returns a new image with the masked pixels made transparent
    ///
    /// The receiver is left untouched.
    ///
    /// # Errors
    ///
    /// * `Error::DimensionMismatch` - When image and mask dimensions don't match
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use imageops_cutout::{ApplyRemovalMask, Image, PixelMask};
    /// use image::Rgba;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let image: Image<Rgba<u8>> = Image::new(10, 10);
    /// let mask = PixelMask::from_fn(10, 10, |x, _| x < 5);
    ///
    /// let cutout = image.apply_removal_mask(&mask)?;
    /// # Ok(())
    /// # }
    /// ```
    fn apply_removal_mask(&self, mask: &PixelMask) -> Result<Image<Rgba<u8>>>;

    /// Makes the masked pixels transparent in-place
    ///
    /// # Errors
    ///
    /// * `Error::DimensionMismatch` - When image and mask dimensions don't match
    fn apply_removal_mask_mut(&mut self, mask: &PixelMask) -> Result<&mut Self>;
}

impl ApplyRemovalMask for Image<Rgba<u8>> {
    fn apply_removal_mask(&self, mask: &PixelMask) -> Result<Image<Rgba<u8>>> {
        validate_dimensions(self, mask)?;

        let result = map_colors2(self, &mask.to_luma_image(), |pixel, Luma([removed])| {
            if removed > 0 {
                TRANSPARENT_WHITE
            } else {
                pixel
            }
        });

        Ok(result)
    }

    fn apply_removal_mask_mut(&mut self, mask: &PixelMask) -> Result<&mut Self> {
        validate_dimensions(self, mask)?;

        for (x, y) in mask.iter() {
            self.put_pixel(x, y, TRANSPARENT_WHITE);
        }

        Ok(self)
    }
}

#[inline]
fn validate_dimensions<I>(image: &I, mask: &PixelMask) -> Result<()>
where
    I: GenericImageView,
{
    let (img_w, img_h) = image.dimensions();
    let (mask_w, mask_h) = mask.dimensions();

    validate_matching_dimensions(img_w, img_h, mask_w, mask_h, "ApplyRemovalMask").map_err(
        |_| Error::DimensionMismatch {
            expected: (img_w, img_h),
            actual: (mask_w, mask_h),
        },
    )
}
