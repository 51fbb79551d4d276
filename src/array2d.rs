// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use std::ops::Index;
use std::ops::IndexMut;
use std::slice;

/// column-major 2D array, indexed by `(x, y)` where `x` selects the column
///
/// ```
/// # use polykit::array2d::Array2D;
/// let array = Array2D::from_array(3, 2, vec![0, 1, 10, 11, 20, 21]);
/// assert_eq!(array[(2, 1)], 21);
/// assert_eq!(array.x_size(), 3);
/// assert_eq!(array.y_size(), 2);
/// ```
#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub struct Array2D<T> {
    x_size: usize,
    y_size: usize,
    data: Vec<T>,
}

impl<T> Array2D<T> {
    /// data is a column-major 2D array
    pub fn from_array(x_size: usize, y_size: usize, data: Vec<T>) -> Self {
        assert_eq!(x_size * y_size, data.len());
        Self {
            x_size,
            y_size,
            data,
        }
    }
    pub fn from_fn<F: FnMut(usize, usize) -> T>(x_size: usize, y_size: usize, mut f: F) -> Self {
        let mut data = Vec::with_capacity(x_size * y_size);
        for x in 0..x_size {
            for y in 0..y_size {
                data.push(f(x, y));
            }
        }
        Self::from_array(x_size, y_size, data)
    }
    pub fn x_size(&self) -> usize {
        self.x_size
    }
    pub fn y_size(&self) -> usize {
        self.y_size
    }
    fn get_index(&self, x: usize, y: usize) -> usize {
        assert!(x < self.x_size);
        assert!(y < self.y_size);
        x * self.y_size + y
    }
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.x_size && y < self.y_size {
            Some(&self.data[x * self.y_size + y])
        } else {
            None
        }
    }
    /// elements in column-major order
    pub fn iter(&self) -> slice::Iter<T> {
        self.data.iter()
    }
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Array2D<U> {
        Array2D {
            x_size: self.x_size,
            y_size: self.y_size,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T> Index<(usize, usize)> for Array2D<T> {
    type Output = T;
    fn index(&self, (x, y): (usize, usize)) -> &T {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2D<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_square_layout() {
        let mut array = Array2D::from_fn(2, 3, |x, y| x * 10 + y);
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 10, 11, 12]);
        assert_eq!(array[(1, 2)], 12);
        array[(0, 2)] = 99;
        assert_eq!(array.get(0, 2), Some(&99));
        assert_eq!(array.get(2, 0), None);
        assert_eq!(array.map(|v| v * 2)[(1, 0)], 20);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range() {
        let array = Array2D::from_array(1, 1, vec![0]);
        let _ = array[(0, 1)];
    }
}
