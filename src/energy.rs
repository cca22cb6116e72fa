// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image.
//!
//! Two passes over one buffer.  The first writes the local energy of
//! every pixel: its color distance to the pixel above plus its color
//! distance to the pixel on the left, with the absent neighbor simply
//! dropped along the top row and the left column.  The second pass
//! folds the local energies into cumulative path totals,
//!
//! ```text
//!                              ⎧ cum(x−1, y−1)   (x > 0)
//! cum(x, y) = local(x, y) + min⎨ cum(x,   y−1)
//!                              ⎩ cum(x+1, y−1)   (x < w−1)
//! ```
//!
//! so that after the pass every cell holds the cheapest total energy
//! of any connected path from the top row down to it.  Row zero keeps
//! its local values.
//!
//! Both passes stay inside the caller's *active width* `w`: columns at
//! or beyond `w` have already been carved away and are never read or
//! written.

use crate::gridmap::GridMap;
use crate::pixel::{color_delta, PixelGrid};
use itertools::iproduct;

/// Energy totals, one `u32` per pixel, same shape and addressing as
/// the pixel grid they were computed from.
pub type EnergyMap = GridMap<u32>;

/// Compute the energy of every pixel in the first `active_width`
/// columns of `grid`.
///
/// The returned map holds finished cumulative totals; the intermediate
/// local values are overwritten in place by the second pass.  Totals
/// wrap on `u32` overflow rather than panic; a wrapped total is still
/// comparable, just no longer a faithful path length.
pub fn calculate_energy(grid: &PixelGrid, active_width: u32) -> EnergyMap {
    let height = grid.height;
    let mut map = EnergyMap::new(grid.width, height);

    // Local pass.  The top-left corner stays zero: it has no neighbor
    // above and none on the left.
    for (y, x) in iproduct!(0..height, 0..active_width) {
        let here = grid[(x, y)];
        let mut local = 0;
        if y > 0 {
            local += color_delta(here, grid[(x, y - 1)]);
        }
        if x > 0 {
            local += color_delta(here, grid[(x - 1, y)]);
        }
        map[(x, y)] = local;
    }

    // Cumulative pass.  Row-major order means row y-1 is always final
    // by the time row y reads it, which is what lets the two passes
    // share one buffer.
    for (y, x) in iproduct!(1..height, 0..active_width) {
        let mut best = map[(x, y - 1)];
        if x > 0 {
            best = best.min(map[(x - 1, y - 1)]);
        }
        if x + 1 < active_width {
            best = best.min(map[(x + 1, y - 1)]);
        }
        map[(x, y)] = map[(x, y)].wrapping_add(best);
    }

    map
}
