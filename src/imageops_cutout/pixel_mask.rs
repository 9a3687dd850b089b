//! Dense coordinate sets over an image grid.
//!
//! Every set of pixel coordinates produced during segmentation (background
//! candidates, subject pixels, dilated barriers, removal masks) is a
//! [`PixelMask`]. Membership is a flat `Vec<bool>` indexed by
//! `y * width + x`, so both lookup and insertion are O(1) without hashing.

use image::Luma;
use itertools::iproduct;

use crate::Image;

/// A set of pixel coordinates bounded by an image's dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
    len: usize,
}

impl PixelMask {
    /// Creates an empty mask for a `width` x `height` grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
            len: 0,
        }
    }

    /// Creates a mask containing every coordinate for which `predicate` holds.
    pub fn from_fn<F>(width: u32, height: u32, mut predicate: F) -> Self
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut mask = Self::new(width, height);
        for (y, x) in iproduct!(0..height, 0..width) {
            if predicate(x, y) {
                mask.insert(x, y);
            }
        }
        mask
    }

    /// Returns `(width, height)` of the grid this mask covers.
    #[inline]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of coordinates in the set.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `(x, y)` is in the set. Out-of-bounds coordinates
    /// are never members.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.index(x, y).is_some_and(|i| self.bits[i])
    }

    /// Adds `(x, y)` to the set.
    ///
    /// Returns `true` if the coordinate was not present before, mirroring
    /// `HashSet::insert`. Out-of-bounds coordinates are ignored and return
    /// `false`.
    #[inline]
    pub fn insert(&mut self, x: u32, y: u32) -> bool {
        match self.index(x, y) {
            Some(i) if !self.bits[i] => {
                self.bits[i] = true;
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    /// Iterates over the members in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &set)| set)
            .map(move |(i, _)| {
                let i = i as u64;
                ((i % u64::from(width)) as u32, (i / u64::from(width)) as u32)
            })
    }

    /// Returns `true` if every member of `self` is also in `other`.
    ///
    /// Masks of different dimensions are compared by coordinate.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|(x, y)| other.contains(x, y))
    }

    /// Returns `true` if `self` and `other` have no coordinate in common.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.iter().all(|(x, y)| !other.contains(x, y))
    }

    /// Renders the mask as a grayscale image: 255 for members, 0 elsewhere.
    pub fn to_luma_image(&self) -> Image<Luma<u8>> {
        Image::from_fn(self.width, self.height, |x, y| {
            Luma([if self.contains(x, y) { 255 } else { 0 }])
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}

impl Extend<(u32, u32)> for PixelMask {
    fn extend<T: IntoIterator<Item = (u32, u32)>>(&mut self, iter: T) {
        for (x, y) in iter {
            self.insert(x, y);
        }
    }
}

/// Returns `true` if `(x, y)` lies on the outermost row or column.
#[inline]
pub(crate) const fn is_border(x: u32, y: u32, width: u32, height: u32) -> bool {
    x == 0 || y == 0 || x + 1 == width || y + 1 == height
}

const NEIGHBORS_4: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// In-bounds up/down/left/right neighbours of `(x, y)`.
#[inline]
pub(crate) fn neighbors4(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> impl Iterator<Item = (u32, u32)> {
    NEIGHBORS_4
        .into_iter()
        .filter_map(move |(dx, dy)| offset(x, y, dx, dy, width, height))
}

/// In-bounds neighbours of `(x, y)` including the four diagonals.
#[inline]
pub(crate) fn neighbors8(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> impl Iterator<Item = (u32, u32)> {
    NEIGHBORS_8
        .into_iter()
        .filter_map(move |(dx, dy)| offset(x, y, dx, dy, width, height))
}

#[inline]
fn offset(x: u32, y: u32, dx: i32, dy: i32, width: u32, height: u32) -> Option<(u32, u32)> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    (nx < width && ny < height).then_some((nx, ny))
}
