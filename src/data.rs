use crate::errors::ArborError;
use std::fmt::Debug;
use std::hash::Hash;

/// Data trait used throughout the package
/// for categorical class labels and attribute values.
///
/// Values are used as map keys, so they need equality and hashing,
/// and ordering is used to break majority-class ties.
pub trait Category: Clone + Debug + Eq + Hash + Ord + Send + Sync {}

impl<T> Category for T where T: Clone + Debug + Eq + Hash + Ord + Send + Sync {}

/// Contiguous Column Major Matrix data container.
///
/// Column 0 holds the class label of each row, columns `1..cols` hold the
/// categorical attributes. The buffer is borrowed and never copied, subsets
/// of rows are selected through `index`.
pub struct Matrix<'a, T> {
    /// The raw data stored in a single slice.
    pub data: &'a [T],
    /// Indices into the data row-wise.
    pub index: Vec<usize>,
    /// Number of rows in the matrix.
    pub rows: usize,
    /// Number of columns in the matrix.
    pub cols: usize,
    stride1: usize,
    stride2: usize,
}

impl<'a, T> Matrix<'a, T> {
    // Defaults to column major
    /// Create a new Matrix.
    pub fn new(data: &'a [T], rows: usize, cols: usize) -> Self {
        Matrix {
            data,
            index: (0..rows).collect(),
            rows,
            cols,
            stride1: rows,
            stride2: 1,
        }
    }

    /// Create a new Matrix that only exposes the rows in `index`.
    pub fn with_index(data: &'a [T], rows: usize, cols: usize, index: Vec<usize>) -> Self {
        Matrix {
            index,
            ..Matrix::new(data, rows, cols)
        }
    }

    /// Check that the buffer fills the matrix, and there is a class column.
    pub fn validate(&self) -> Result<(), ArborError> {
        if self.cols == 0 || self.data.len() != self.rows * self.cols || self.index.iter().any(|i| *i >= self.rows) {
            return Err(ArborError::InvalidShape(self.data.len(), self.rows, self.cols));
        }
        Ok(())
    }

    /// Get a single reference to an item in the matrix.
    ///
    /// * `i` - The ith row of the data to get.
    /// * `j` - the jth column of the data to get.
    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.data[self.item_index(i, j)]
    }

    fn item_index(&self, i: usize, j: usize) -> usize {
        let mut idx = self.stride2 * i;
        idx += j * self.stride1;
        idx
    }

    /// Get the class label of a row.
    pub fn label(&self, i: usize) -> &T {
        self.get(i, 0)
    }

    /// Number of attribute columns, excluding the class column.
    pub fn n_attributes(&self) -> usize {
        self.cols.saturating_sub(1)
    }
}

impl<'a, T> Matrix<'a, T>
where
    T: Clone,
{
    /// Class labels of the indexed rows, in index order.
    pub fn labels(&self) -> Vec<T> {
        self.index.iter().map(|i| self.label(*i).clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get() {
        let v = vec![1, 2, 3, 5, 6, 7];
        let m = Matrix::new(&v, 3, 2);
        assert_eq!(m.get(0, 0), &1);
        assert_eq!(m.get(1, 0), &2);
        assert_eq!(m.get(0, 1), &5);
        assert_eq!(m.get(2, 1), &7);
        assert_eq!(m.label(2), &3);
        assert_eq!(m.n_attributes(), 1);
    }

    #[test]
    fn test_labels_follow_index() {
        let v = vec!['a', 'b', 'c', 'x', 'y', 'z'];
        let m = Matrix::with_index(&v, 3, 2, vec![2, 0]);
        assert_eq!(m.labels(), vec!['c', 'a']);
    }

    #[test]
    fn test_validate() {
        let v = vec![1, 2, 3, 5, 6];
        assert_eq!(
            Matrix::new(&v, 3, 2).validate(),
            Err(ArborError::InvalidShape(5, 3, 2))
        );
        let v = vec![1, 2, 3];
        assert!(Matrix::new(&v, 3, 1).validate().is_ok());
        assert!(Matrix::with_index(&v, 3, 1, vec![3]).validate().is_err());
        let v: Vec<u8> = Vec::new();
        assert!(Matrix::new(&v, 0, 0).validate().is_err());
    }
}
