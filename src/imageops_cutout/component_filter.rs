use tracing::debug;

use crate::imageops_cutout::components::Component;
use crate::imageops_cutout::pixel_mask::PixelMask;

/// Builds the removal mask from labelled background candidates.
///
/// A component is treated as background when it touches the image border
/// or has more than `min_size` pixels. Smaller enclosed components (eye
/// highlights, white accents on clothing) are preserved. A component of
/// exactly `min_size` pixels is preserved.
pub fn removal_mask_from_components(
    components: &[Component],
    dimensions: (u32, u32),
    min_size: usize,
) -> PixelMask {
    let (width, height) = dimensions;
    let mut removal = PixelMask::new(width, height);

    for component in components {
        if component.touches_border() || component.len() > min_size {
            removal.extend(component.pixels().iter().copied());
        } else {
            debug!(
                size = component.len(),
                seed = ?component.seed(),
                "keeping small enclosed component"
            );
        }
    }

    removal
}
