//! 4-connected component labelling of a coordinate set.

use std::collections::VecDeque;

use crate::imageops_cutout::pixel_mask::{is_border, neighbors4, PixelMask};

/// A maximal 4-connected group of coordinates from one [`PixelMask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pixels: Vec<(u32, u32)>,
    touches_border: bool,
}

impl Component {
    /// Coordinates in breadth-first visit order, starting from the seed.
    pub fn pixels(&self) -> &[(u32, u32)] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// `true` if any pixel lies on the first/last row or column.
    pub const fn touches_border(&self) -> bool {
        self.touches_border
    }

    /// The first pixel visited, which is the top-most, left-most member.
    pub fn seed(&self) -> Option<(u32, u32)> {
        self.pixels.first().copied()
    }
}

/// Partitions `mask` into its 4-connected components.
///
/// Seeds are taken in row-major order and each one is grown with a FIFO
/// breadth-first search, so the output is deterministic for a given mask.
/// Every member of `mask` is visited exactly once and lands in exactly one
/// component. An empty mask yields no components.
pub fn label_components(mask: &PixelMask) -> Vec<Component> {
    let (width, height) = mask.dimensions();
    let mut visited = PixelMask::new(width, height);
    let mut queue = VecDeque::new();
    let mut components = Vec::new();

    for (seed_x, seed_y) in mask.iter() {
        if !visited.insert(seed_x, seed_y) {
            continue;
        }

        let mut pixels = Vec::new();
        let mut touches_border = false;
        queue.push_back((seed_x, seed_y));

        while let Some((x, y)) = queue.pop_front() {
            pixels.push((x, y));
            touches_border |= is_border(x, y, width, height);

            for (nx, ny) in neighbors4(x, y, width, height) {
                if mask.contains(nx, ny) && visited.insert(nx, ny) {
                    queue.push_back((nx, ny));
                }
            }
        }

        components.push(Component {
            pixels,
            touches_border,
        });
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mask_has_no_components() {
        assert!(label_components(&PixelMask::new(4, 4)).is_empty());
    }

    #[test]
    fn diagonal_pixels_are_separate_components() {
        let mask = PixelMask::from_fn(3, 3, |x, y| x == y);
        let components = label_components(&mask);
        assert_eq!(components.len(), 3);
        assert!(components.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn border_flag_is_derived_from_members() {
        // Frame of width 1 plus an isolated centre pixel on a 5x5 grid
        let mask = PixelMask::from_fn(5, 5, |x, y| {
            is_border(x, y, 5, 5) || (x == 2 && y == 2)
        });
        let components = label_components(&mask);

        assert_eq!(components.len(), 2);
        let frame = &components[0];
        let centre = &components[1];
        assert_eq!(frame.len(), 16);
        assert!(frame.touches_border());
        assert_eq!(centre.pixels(), &[(2, 2)]);
        assert!(!centre.touches_border());
    }

    #[test]
    fn seeds_follow_row_major_order() {
        let mask = PixelMask::from_fn(6, 2, |x, _| x != 2);
        let components = label_components(&mask);
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].seed(), Some((0, 0)));
        assert_eq!(components[1].seed(), Some((3, 0)));
        assert_eq!(components[0].len(), 4);
        assert_eq!(components[1].len(), 6);
    }

    #[test]
    fn components_partition_the_mask() {
        let mask = PixelMask::from_fn(8, 8, |x, y| (x * 3 + y * 5) % 4 != 0);
        let components = label_components(&mask);

        let mut union = PixelMask::new(8, 8);
        for component in &components {
            for &(x, y) in component.pixels() {
                assert!(union.insert(x, y), "({x}, {y}) in two components");
            }
        }
        assert_eq!(union, mask);
    }
}
