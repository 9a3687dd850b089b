mod error;
mod imageops_cutout;
#[cfg(test)]
mod test_utils;
mod utils;

use image::{ImageBuffer, Pixel};

pub use error::{Error, Result};
pub use imageops_cutout::classify::{is_background_candidate, is_subject, ClassifyPixels};
pub use imageops_cutout::component_filter::removal_mask_from_components;
pub use imageops_cutout::components::{label_components, Component};
pub use imageops_cutout::composite::{ApplyRemovalMask, TRANSPARENT_WHITE};
pub use imageops_cutout::flood_fill::{border_flood_fill, corner_flood_fill, flood_fill};
pub use imageops_cutout::pixel_mask::PixelMask;
pub use imageops_cutout::remove_background::{
    encode_png, remove_background_from_bytes, RemoveBackground, Strategy,
    DEFAULT_ANTI_LEAK_THRESHOLD, DEFAULT_DILATION_RADIUS, DEFAULT_MIN_COMPONENT_SIZE,
    DEFAULT_THRESHOLD,
};

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
