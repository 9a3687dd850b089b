use crate::imageops_cutout::pixel_mask::{neighbors8, PixelMask};

impl PixelMask {
    /// Grows the mask by `radius` steps of 8-connected expansion.
    ///
    /// Each step adds every in-bounds neighbour (diagonals included) of every
    /// member. Only pixels added by the previous step can contribute new
    /// neighbours, so each step walks the current frontier instead of the
    /// whole mask. The result is the set of pixels within Chebyshev distance
    /// `radius` of the input. `radius == 0` returns an unchanged copy.
    pub fn dilate(&self, radius: u32) -> Self {
        let (width, height) = self.dimensions();
        let mut dilated = self.clone();
        let mut frontier: Vec<(u32, u32)> = self.iter().collect();

        for _ in 0..radius {
            if frontier.is_empty() {
                break;
            }
            let mut next = Vec::new();
            for &(x, y) in &frontier {
                for (nx, ny) in neighbors8(x, y, width, height) {
                    if dilated.insert(nx, ny) {
                        next.push((nx, ny));
                    }
                }
            }
            frontier = next;
        }

        dilated
    }
}
