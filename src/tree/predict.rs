//! Tree Prediction Methods
//!
//! Classification of single rows and whole datasets with a grown tree.
use super::tree::{Tree, ROOT};
use crate::data::{Category, Matrix};
use crate::errors::ArborError;
use crate::metric::accuracy;
use crate::node::Node;
use rayon::prelude::*;

impl<T: Category> Tree<T> {
    /// Follow a row from the root and return the node where it stops.
    ///
    /// `value` reads an attribute column of the row. The walk stops at a
    /// leaf, or at a decision node with no child for the row's value.
    /// `visit` sees every node on the path, the last one included.
    pub(crate) fn descend<'a, 'b, F, V>(&'a self, value: F, mut visit: V) -> &'a Node<T>
    where
        T: 'b,
        F: Fn(usize) -> Option<&'b T>,
        V: FnMut(&'a Node<T>),
    {
        let mut node = &self.nodes[&ROOT];
        loop {
            visit(node);
            match node.split_attribute.and_then(&value).and_then(|v| node.get_child_idx(v)) {
                Some(idx) => node = &self.nodes[&idx],
                None => return node,
            }
        }
    }

    /// Walk a row down the tree and return the class it lands on.
    ///
    /// The row uses the dataset layout, its column 0 is ignored. When the row
    /// carries a value that a decision node never saw during training, the
    /// walk stops there and that node's majority class is returned.
    pub fn predict_row(&self, row: &[T]) -> &T {
        &self.descend(|attr| row.get(attr), |_| ()).majority_class
    }

    fn predict_matrix_row(&self, data: &Matrix<T>, row: usize) -> T {
        self.descend(|attr| (attr < data.cols).then(|| data.get(row, attr)), |_| ())
            .majority_class
            .clone()
    }

    fn predict_single_threaded(&self, data: &Matrix<T>) -> Vec<T> {
        data.index.iter().map(|i| self.predict_matrix_row(data, *i)).collect()
    }

    fn predict_parallel(&self, data: &Matrix<T>) -> Vec<T> {
        data.index
            .par_iter()
            .map(|i| self.predict_matrix_row(data, *i))
            .collect()
    }

    /// Predict the class of every row in `data.index`, in index order.
    pub fn predict(&self, data: &Matrix<T>, parallel: bool) -> Result<Vec<T>, ArborError> {
        data.validate()?;
        if parallel {
            Ok(self.predict_parallel(data))
        } else {
            Ok(self.predict_single_threaded(data))
        }
    }

    /// Fraction of the rows in `data.index` whose class is predicted correctly.
    pub fn score(&self, data: &Matrix<T>) -> Result<f64, ArborError> {
        let predictions = self.predict(data, false)?;
        accuracy(&data.labels(), &predictions)
    }
}
