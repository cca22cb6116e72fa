// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pixels and the energy of a pixel pair.
//!
//! The energy between two pixels is the distance between their colors:
//! the classic d(R²) + d(G²) + d(B²).  Higher means the image changes
//! more sharply between the two.

use crate::cq;
use crate::gridmap::GridMap;

/// One 8-bit-per-channel RGB pixel.  The default value is black, which
/// is also what carved-away columns are repainted with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
}

/// The image proper: a grid of pixels.  Its `width` is the declared
/// buffer width and never changes; carving shrinks only the *active*
/// width its callers keep track of.
pub type PixelGrid = GridMap<Rgb>;

/// (Pixel, Pixel) -> Energy
///
/// Sum of the squared differences of the three channels.  Maximum is
/// 3 * 255², comfortably inside a `u32`.
#[inline]
pub fn color_delta(a: Rgb, b: Rgb) -> u32 {
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);
    (dr * dr + dg * dg + db * db) as u32
}

impl GridMap<Rgb> {
    /// Mean brightness over the whole buffer: the truncating per-pixel
    /// mean of the three channels, then the truncating mean of those.
    /// An empty grid has brightness 0.
    pub fn brightness(&self) -> u8 {
        let count = self.as_slice().len() as u64;
        let total: u64 = self
            .as_slice()
            .iter()
            .map(|p| u64::from((u32::from(p.r) + u32::from(p.g) + u32::from(p.b)) / 3))
            .sum();
        cq!(count == 0, 0, (total / count) as u8)
    }
}
