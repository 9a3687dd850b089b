//! Background removal pipelines.
//!
//! Three strategies share one data model and end in the same compositing
//! step. The caller picks one explicitly through [`Strategy`]:
//!
//! - **Connected components**: light pixels are labelled into 4-connected
//!   components; components touching the border or larger than `min_size`
//!   are removed, small enclosed ones (eye highlights, white accents) stay.
//! - **Anti-leak**: the subject mask is dilated by `dilation_radius` before
//!   a border-seeded flood fill, so the fill cannot slip through thin gaps
//!   in an outline into the subject's interior.
//! - **Corner flood fill**: light pixels reachable from the four corners are
//!   removed. Enclosed background (e.g. between limbs) is kept.
//!
//! Every call is a pure function of its input: masks are allocated per call
//! and dropped after compositing.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba};
use tracing::{debug, info, instrument};

use crate::error::{Error, Result};
use crate::imageops_cutout::classify::ClassifyPixels;
use crate::imageops_cutout::component_filter::removal_mask_from_components;
use crate::imageops_cutout::components::label_components;
use crate::imageops_cutout::composite::ApplyRemovalMask;
use crate::imageops_cutout::flood_fill::{border_flood_fill, corner_flood_fill};
use crate::imageops_cutout::pixel_mask::PixelMask;
use crate::utils::{checked_parameter, validate_non_empty_image};
use crate::Image;

/// Background-likeness threshold used by the connected-component and
/// corner flood-fill strategies.
pub const DEFAULT_THRESHOLD: u8 = 240;

/// Subject threshold used by the anti-leak strategy.
pub const DEFAULT_ANTI_LEAK_THRESHOLD: u8 = 245;

/// Enclosed light components up to this many pixels are preserved.
pub const DEFAULT_MIN_COMPONENT_SIZE: usize = 20;

/// Number of 8-connected dilation steps applied to the subject mask.
pub const DEFAULT_DILATION_RADIUS: u32 = 3;

/// Segmentation strategy and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Remove light components that touch the border or exceed `min_size`.
    ConnectedComponents {
        /// A pixel is a background candidate if every RGB channel is above this
        threshold: u8,
        /// Largest enclosed component that is still preserved
        min_size: usize,
    },
    /// Border-seeded flood fill behind a dilated subject barrier.
    AntiLeak {
        /// A pixel is subject if any RGB channel is below this
        threshold: u8,
        /// Dilation steps applied to the subject mask
        dilation_radius: u32,
    },
    /// Flood fill from the four corners through background candidates.
    CornerFloodFill {
        /// A pixel is a background candidate if every RGB channel is above this
        threshold: u8,
    },
}

impl Default for Strategy {
    fn default() -> Self {
        Self::connected_components()
    }
}

impl Strategy {
    /// Connected-component strategy with threshold 240 and minimum size 20.
    pub const fn connected_components() -> Self {
        Self::ConnectedComponents {
            threshold: DEFAULT_THRESHOLD,
            min_size: DEFAULT_MIN_COMPONENT_SIZE,
        }
    }

    /// Anti-leak strategy with threshold 245 and dilation radius 3.
    pub const fn anti_leak() -> Self {
        Self::AntiLeak {
            threshold: DEFAULT_ANTI_LEAK_THRESHOLD,
            dilation_radius: DEFAULT_DILATION_RADIUS,
        }
    }

    /// Corner flood-fill strategy with threshold 240.
    pub const fn corner_flood_fill() -> Self {
        Self::CornerFloodFill {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Builds a connected-component strategy from unchecked integers.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidParameter` - threshold outside `0..=255` or negative `min_size`
    pub fn try_connected_components(threshold: i64, min_size: i64) -> Result<Self> {
        Ok(Self::ConnectedComponents {
            threshold: parameter("threshold", threshold, 0, 255)?,
            min_size: parameter("min_size", min_size, 0, i64::MAX)?,
        })
    }

    /// Builds an anti-leak strategy from unchecked integers.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidParameter` - threshold outside `0..=255` or radius
    ///   outside `0..=u32::MAX`
    pub fn try_anti_leak(threshold: i64, dilation_radius: i64) -> Result<Self> {
        Ok(Self::AntiLeak {
            threshold: parameter("threshold", threshold, 0, 255)?,
            dilation_radius: parameter(
                "dilation_radius",
                dilation_radius,
                0,
                i64::from(u32::MAX),
            )?,
        })
    }

    /// Builds a corner flood-fill strategy from an unchecked threshold.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidParameter` - threshold outside `0..=255`
    pub fn try_corner_flood_fill(threshold: i64) -> Result<Self> {
        Ok(Self::CornerFloodFill {
            threshold: parameter("threshold", threshold, 0, 255)?,
        })
    }

    /// Short name used in log output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ConnectedComponents { .. } => "connected-components",
            Self::AntiLeak { .. } => "anti-leak",
            Self::CornerFloodFill { .. } => "corner-flood-fill",
        }
    }
}

fn parameter<T>(name: &'static str, value: i64, min: i64, max: i64) -> Result<T>
where
    T: TryFrom<i64>,
{
    checked_parameter(value, min, max).map_err(|(min, max)| Error::InvalidParameter {
        name,
        value,
        min,
        max,
    })
}

/// Trait providing model-free background removal
pub trait RemoveBackground {
    /// Computes which pixels `strategy` classifies as background
    ///
    /// # Errors
    ///
    /// * `Error::EmptyImage` - When the image has a zero dimension
    fn removal_mask(&self, strategy: &Strategy) -> Result<PixelMask>;

    /// Returns a copy of the image with its background made transparent
    ///
    /// Removed pixels become `(255, 255, 255, 0)`; all others are copied
    /// unchanged.
    ///
    /// # Errors
    ///
    /// * `Error::EmptyImage` - When the image has a zero dimension
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use imageops_cutout::{RemoveBackground, Strategy};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let sticker = image::open("sticker.png")?;
    /// let cutout = sticker.remove_background(&Strategy::anti_leak())?;
    /// cutout.save("sticker_cutout.png")?;
    /// # Ok(())
    /// # }
    /// ```
    fn remove_background(&self, strategy: &Strategy) -> Result<Image<Rgba<u8>>>;
}

impl RemoveBackground for Image<Rgba<u8>> {
    fn removal_mask(&self, strategy: &Strategy) -> Result<PixelMask> {
        let (width, height) = self.dimensions();
        validate_non_empty_image(width, height, "RemoveBackground")
            .map_err(|_| Error::EmptyImage { width, height })?;

        let mask = match *strategy {
            Strategy::ConnectedComponents {
                threshold,
                min_size,
            } => {
                let candidates = self.background_candidates(threshold);
                let components = label_components(&candidates);
                debug!(
                    candidates = candidates.len(),
                    components = components.len(),
                    "labelled background candidates"
                );
                removal_mask_from_components(&components, (width, height), min_size)
            }
            Strategy::AntiLeak {
                threshold,
                dilation_radius,
            } => {
                let subject = self.subject_pixels(threshold);
                let barrier = subject.dilate(dilation_radius);
                debug!(
                    subject = subject.len(),
                    barrier = barrier.len(),
                    "dilated subject mask"
                );
                border_flood_fill(&barrier)
            }
            Strategy::CornerFloodFill { threshold } => {
                let candidates = self.background_candidates(threshold);
                debug!(candidates = candidates.len(), "classified background candidates");
                corner_flood_fill(&candidates)
            }
        };

        Ok(mask)
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(width = self.width(), height = self.height(), strategy = strategy.name())
    )]
    fn remove_background(&self, strategy: &Strategy) -> Result<Image<Rgba<u8>>> {
        let mask = self.removal_mask(strategy)?;
        info!(
            strategy = strategy.name(),
            removed = mask.len(),
            "removed background pixels"
        );
        self.apply_removal_mask(&mask)
    }
}

impl RemoveBackground for DynamicImage {
    fn removal_mask(&self, strategy: &Strategy) -> Result<PixelMask> {
        self.to_rgba8().removal_mask(strategy)
    }

    fn remove_background(&self, strategy: &Strategy) -> Result<Image<Rgba<u8>>> {
        self.to_rgba8().remove_background(strategy)
    }
}

/// Decodes `bytes`, removes the background and returns the result as PNG.
///
/// Any format enabled on the `image` dependency (PNG, JPEG) is accepted.
/// The output has the input's dimensions.
///
/// # Errors
///
/// * `Error::ImageDecode` - When `bytes` is not a decodable image
/// * `Error::EmptyImage` - When the decoded image has a zero dimension
/// * `Error::ImageEncode` - When PNG encoding fails
pub fn remove_background_from_bytes(bytes: &[u8], strategy: &Strategy) -> Result<Vec<u8>> {
    let image = image::load_from_memory(bytes).map_err(Error::ImageDecode)?;
    let cutout = image.remove_background(strategy)?;
    encode_png(&cutout)
}

/// Encodes an RGBA image as PNG into memory.
///
/// # Errors
///
/// * `Error::ImageEncode` - When the encoder rejects the image
pub fn encode_png(image: &Image<Rgba<u8>>) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(Error::ImageEncode)?;
    Ok(buffer.into_inner())
}
