//! Internal utility functions for imageops-cutout.
//!
//! This module contains validation shared by the public operations.

/// Validates that an image has non-zero dimensions.
///
/// # Arguments
///
/// * `width` - The width of the image
/// * `height` - The height of the image
/// * `context` - A description of the context for error messages
///
/// # Returns
///
/// `Ok(())` if the dimensions are valid, otherwise an error
pub fn validate_non_empty_image(width: u32, height: u32, context: &str) -> Result<(), String> {
    if width == 0 || height == 0 {
        Err(format!("{}: Image dimensions must be non-zero", context))
    } else {
        Ok(())
    }
}

/// Validates that two images have matching dimensions.
///
/// # Arguments
///
/// * `width1` - The width of the first image
/// * `height1` - The height of the first image
/// * `width2` - The width of the second image
/// * `height2` - The height of the second image
/// * `context` - A description of the context for error messages
///
/// # Returns
///
/// `Ok(())` if the dimensions match, otherwise an error
pub fn validate_matching_dimensions(
    width1: u32,
    height1: u32,
    width2: u32,
    height2: u32,
    context: &str,
) -> Result<(), String> {
    if width1 != width2 || height1 != height2 {
        Err(format!(
            "{}: Image dimensions must match. Got {}x{} and {}x{}",
            context, width1, height1, width2, height2
        ))
    } else {
        Ok(())
    }
}

/// Converts a caller-supplied integer into `T`, checking it lies in `min..=max`.
///
/// Returns the offending bounds on failure so the caller can build a
/// descriptive error.
pub fn checked_parameter<T>(value: i64, min: i64, max: i64) -> Result<T, (i64, i64)>
where
    T: TryFrom<i64>,
{
    if (min..=max).contains(&value) {
        T::try_from(value).map_err(|_| (min, max))
    } else {
        Err((min, max))
    }
}
