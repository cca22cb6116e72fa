//! A flat, addressable two-dimensional map.
//!
//! Both the pixel buffer and the energy buffer are the same shape: a
//! single contiguous vector indexed row-major.  The carving math is
//! defined in terms of that layout, so the index computation lives
//! here and nowhere else.

use std::ops::{Index, IndexMut};

/// A `width * height` field of cells in row-major order.  Instantiated
/// with an [`Rgb`](crate::pixel::Rgb) cell for images and a plain `u32`
/// cell for energy totals.
#[derive(Debug)]
pub struct GridMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> GridMap<P> {
    /// A new map with every cell set to the type's default (black, for
    /// pixels; zero, for energies).
    pub fn new(width: u32, height: u32) -> Self {
        GridMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  Returns `None` when the
    /// vector's length is not exactly `width * height`.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        if cells.len() == width as usize * height as usize {
            Some(GridMap {
                width,
                height,
                cells,
            })
        } else {
            None
        }
    }

    // The whole game is keeping the index arithmetic in exactly one
    // place.  Same row-major formula the pixmap file format uses.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// One full row, at the map's declared width.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    /// Mutable access to one full row.
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        let start = self.get_index(0, y);
        let end = start + self.width as usize;
        &mut self.cells[start..end]
    }

    /// The backing cells, row-major.
    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for GridMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for GridMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressing_is_row_major() {
        let map = GridMap::from_raw(3, 2, vec![10u32, 11, 12, 20, 21, 22]).unwrap();
        assert_eq!(map[(0, 0)], 10);
        assert_eq!(map[(2, 0)], 12);
        assert_eq!(map[(0, 1)], 20);
        assert_eq!(map[(2, 1)], 22);
        assert_eq!(map.row(1), &[20, 21, 22]);
    }

    #[test]
    fn writes_land_where_reads_look() {
        let mut map: GridMap<u32> = GridMap::new(4, 3);
        map[(3, 2)] = 99;
        map.row_mut(1)[0] = 7;
        assert_eq!(map.as_slice()[11], 99);
        assert_eq!(map[(0, 1)], 7);
    }

    #[test]
    fn from_raw_rejects_mismatched_lengths() {
        assert!(GridMap::from_raw(2, 2, vec![0u32; 3]).is_none());
        assert!(GridMap::from_raw(2, 2, vec![0u32; 4]).is_some());
    }
}
