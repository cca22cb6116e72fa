// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Locate and trace the cheapest vertical seam.
//!
//! Given a finished cumulative energy map, the bottom row already
//! holds the total cost of the best path ending in each column.  So
//! finding the seam is two small steps: pick the cheapest bottom-row
//! column, then walk back up one row at a time, always stepping to the
//! cheapest of the up-to-three cells touching the current one.
//!
//! Tie-breaking is part of the contract, not a detail.  On equal
//! totals the locator keeps the lowest column index, and the tracer
//! keeps straight-up over up-left over up-right.  Flat regions produce
//! plateaus of equal energy, and every run has to carve the same seam
//! out of them.

use crate::cq;
use crate::energy::{calculate_energy, EnergyMap};
use crate::pixel::PixelGrid;

/// The bottom-row column where the cheapest seam ends.  Scans columns
/// `[0, active_width)` of the last row and keeps the first minimum.
///
/// Expects `active_width >= 1` and a map with at least one row.
pub fn min_energy_column(energy: &EnergyMap, active_width: u32) -> u32 {
    let last_row = energy.height - 1;
    (0..active_width)
        .min_by_key(|x| energy[(*x, last_row)])
        .unwrap()
}

/// Walk the cumulative map upward from `start` and return the full
/// seam, one column per row, top row first.
///
/// At each row the candidates are straight-up (always), up-left (when
/// the current column is not 0) and up-right (when it is not the last
/// active column), examined in that order; a candidate only wins by
/// being strictly cheaper than everything before it.
///
/// Expects `start < active_width` and a map with at least one row.
pub fn trace_seam(energy: &EnergyMap, active_width: u32, start: u32) -> Vec<u32> {
    let height = energy.height;
    let mut seam = vec![0u32; height as usize];
    let mut x = start;
    seam[height as usize - 1] = x;
    for z in (0..height - 1).rev() {
        x = [Some(x), x.checked_sub(1), cq!(x + 1 < active_width, Some(x + 1), None)]
            .iter()
            .filter_map(|&candidate| candidate)
            .min_by_key(|&candidate| energy[(candidate, z)])
            .unwrap();
        seam[z as usize] = x;
    }
    seam
}

/// A convenience wrapper: compute the energy of `grid` and hand back
/// the next seam to remove, without touching the grid.
pub fn find_seam(grid: &PixelGrid, active_width: u32) -> Vec<u32> {
    let energy = calculate_energy(grid, active_width);
    let start = min_energy_column(&energy, active_width);
    trace_seam(&energy, active_width, start)
}
