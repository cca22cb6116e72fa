//! Render an energy map as a grayscale image for eyeballing.
//!
//! Cumulative energies grow without bound as the rows accumulate, so
//! the map is rescaled against its own brightest cell before it is
//! squeezed into eight bits.  Handy for checking that the energy pass
//! is seeing the edges you think it should be seeing.

use image::GrayImage;
use num_traits::clamp;

use crate::cq;
use crate::energy::EnergyMap;

/// Scale `map` into an 8-bit grayscale image, the hottest cell white.
pub fn energy_to_image(map: &EnergyMap) -> GrayImage {
    let ceiling = u64::from(map.as_slice().iter().max().copied().unwrap_or(0));
    let samples: Vec<u8> = map
        .as_slice()
        .iter()
        .map(|&e| cq!(ceiling == 0, 0, clamp(u64::from(e) * 256 / ceiling, 0, 255) as u8))
        .collect();
    GrayImage::from_raw(map.width, map.height, samples).unwrap()
}
