//! Work-list flood fills used by the flood-fill based strategies.
//!
//! All fills use an explicit FIFO queue, never recursion, so stack depth is
//! independent of image size.

use std::collections::VecDeque;

use itertools::iproduct;

use crate::imageops_cutout::pixel_mask::{is_border, neighbors4, PixelMask};

/// Marks every pixel reachable from `seeds` through 4-connected steps that
/// stay on `passable` pixels.
///
/// Seeds that are not passable are skipped.
pub fn flood_fill<I, F>(dimensions: (u32, u32), seeds: I, passable: F) -> PixelMask
where
    I: IntoIterator<Item = (u32, u32)>,
    F: Fn(u32, u32) -> bool,
{
    let (width, height) = dimensions;
    let mut filled = PixelMask::new(width, height);
    let mut queue = VecDeque::new();

    for (x, y) in seeds {
        if x < width && y < height && passable(x, y) && filled.insert(x, y) {
            queue.push_back((x, y));
        }
    }

    while let Some((x, y)) = queue.pop_front() {
        for (nx, ny) in neighbors4(x, y, width, height) {
            if passable(nx, ny) && filled.insert(nx, ny) {
                queue.push_back((nx, ny));
            }
        }
    }

    filled
}

/// Fills from every border pixel outside `barrier`, never entering it.
///
/// The result is disjoint from `barrier`. Background fully enclosed by the
/// barrier stays unfilled.
pub fn border_flood_fill(barrier: &PixelMask) -> PixelMask {
    let (width, height) = barrier.dimensions();
    let seeds = iproduct!(0..height, 0..width)
        .map(|(y, x)| (x, y))
        .filter(|&(x, y)| is_border(x, y, width, height));

    flood_fill((width, height), seeds, |x, y| !barrier.contains(x, y))
}

/// Sampling step of the top-row scan used when no corner is a candidate.
const TOP_ROW_SAMPLE_STEP: usize = 10;

/// Fills from the four image corners through `candidates` only.
///
/// When none of the corners is a candidate, the top row is sampled every
/// [`TOP_ROW_SAMPLE_STEP`] pixels and the first candidate found seeds the
/// fill instead. The mask is empty only if that scan finds nothing either.
pub fn corner_flood_fill(candidates: &PixelMask) -> PixelMask {
    let (width, height) = candidates.dimensions();
    let (right, bottom) = (width.saturating_sub(1), height.saturating_sub(1));
    let mut seeds: Vec<(u32, u32)> = [(0, 0), (right, 0), (0, bottom), (right, bottom)]
        .into_iter()
        .filter(|&(x, y)| candidates.contains(x, y))
        .collect();

    if seeds.is_empty() {
        seeds.extend(
            (0..width)
                .step_by(TOP_ROW_SAMPLE_STEP)
                .find(|&x| candidates.contains(x, 0))
                .map(|x| (x, 0)),
        );
    }

    flood_fill((width, height), seeds, |x, y| candidates.contains(x, y))
}
