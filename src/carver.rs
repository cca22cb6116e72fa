// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Remove seams from the pixel buffer.
//!
//! Carving never reallocates and never changes the grid's declared
//! width.  Each removed seam closes up one column inside the *active*
//! window and repaints the column that fell off its right edge black,
//! so the buffer stays printable at full width while the image
//! narrows inside it.

use crate::energy::calculate_energy;
use crate::pixel::{PixelGrid, Rgb};
use crate::seam::{min_energy_column, trace_seam};

/// Carve one traced seam out of `grid`, in place.
///
/// Row by row, every pixel right of the seam inside the active window
/// moves one column left (`active_width - seam[y] - 1` copies), and
/// column `active_width - 1` is repainted black.  Expects one seam
/// entry per row, each below `active_width`, and `active_width >= 1`.
pub fn carve_seam(grid: &mut PixelGrid, active_width: u32, seam: &[u32]) {
    let last = active_width as usize - 1;
    for y in 0..grid.height {
        let x = seam[y as usize] as usize;
        let row = grid.row_mut(y);
        row[x..=last].copy_within(1.., 0);
        row[last] = Rgb::BLACK;
    }
}

/// Repeated carving against one grid, with the bookkeeping the loop
/// needs: the active width starts at the buffer's declared width and
/// drops by one per carved seam, while the buffer never shrinks.
pub struct Carver<'a> {
    grid: &'a mut PixelGrid,
    active: u32,
}

impl<'a> Carver<'a> {
    pub fn new(grid: &'a mut PixelGrid) -> Carver<'a> {
        let active = grid.width;
        Carver { grid, active }
    }

    /// How many columns are still part of the image.
    pub fn active_width(&self) -> u32 {
        self.active
    }

    /// Carve up to `requested` seams and return how many actually came
    /// out.  Requests beyond the remaining active width are clamped,
    /// never an error: asking for too much just empties the image.
    ///
    /// Every iteration recomputes the energy map from scratch before
    /// locating and tracing the next seam.
    // TODO: recompute only the columns a carve disturbed instead of
    // the whole map; everything left of seam-minus-one is unchanged.
    pub fn carve(&mut self, requested: u32) -> u32 {
        let n = requested.min(self.active);
        for _ in 0..n {
            let energy = calculate_energy(self.grid, self.active);
            let start = min_energy_column(&energy, self.active);
            let seam = trace_seam(&energy, self.active, start);
            carve_seam(self.grid, self.active, &seam);
            self.active -= 1;
        }
        n
    }
}
