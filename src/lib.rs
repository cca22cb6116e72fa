// #![deny(missing_docs)]

//! Content-aware shrinking ("seam carving") for plain-text portable
//! pixmaps.  The engine repeatedly finds the vertical path of least
//! local contrast and squeezes it out of the pixel buffer, narrowing
//! the image one column at a time while the buffer itself keeps its
//! declared width.

extern crate image;

pub mod gridmap;
pub use gridmap::GridMap;

pub mod pixel;
pub use pixel::{color_delta, PixelGrid, Rgb};

pub mod energy;
pub use energy::{calculate_energy, EnergyMap};

pub mod seam;
pub use seam::{find_seam, min_energy_column, trace_seam};

pub mod carver;
pub use carver::{carve_seam, Carver};

pub mod pixmap;
pub use pixmap::{read_pixmap, write_pixmap, PixmapError};

pub mod dump;
pub use dump::energy_to_image;

mod ternary;
