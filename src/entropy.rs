//! Entropy and information gain
//!
//! Impurity of class labels, and the choice of the attribute whose
//! partition reduces it the most.
use crate::data::{Category, Matrix};
use crate::partition::partition;
use std::collections::BTreeMap;

/// The attribute a node splits on, and the information gain of that split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitInfo {
    /// Column of the attribute in the dataset, `1..cols`.
    pub split_feature: usize,
    /// Parent entropy minus weighted child entropy, in bits.
    pub split_gain: f64,
}

/// Count the class labels of the rows in `index`, ordered by label.
pub fn class_counts<T: Category>(data: &Matrix<T>, index: &[usize]) -> BTreeMap<T, usize> {
    count_labels(index.iter().map(|i| data.label(*i)))
}

fn count_labels<'a, T: Category + 'a>(labels: impl IntoIterator<Item = &'a T>) -> BTreeMap<T, usize> {
    let mut counts = BTreeMap::new();
    for l in labels {
        *counts.entry(l.clone()).or_insert(0) += 1;
    }
    counts
}

/// Entropy, in bits, of a class histogram.
///
/// Zero counts contribute nothing, so `log2(0)` is never evaluated.
pub fn entropy_from_counts<'a>(counts: impl IntoIterator<Item = &'a usize> + Clone) -> f64 {
    let total: usize = counts.clone().into_iter().sum();
    if total == 0 {
        return 0.;
    }
    let n = total as f64;
    -counts
        .into_iter()
        .filter(|c| **c > 0)
        .map(|c| {
            let p = *c as f64 / n;
            p * p.log2()
        })
        .sum::<f64>()
}

/// Entropy, in bits, of a sequence of class labels.
pub fn entropy<'a, T: Category + 'a>(labels: impl IntoIterator<Item = &'a T>) -> f64 {
    entropy_from_counts(count_labels(labels).values())
}

/// Information gain of splitting the rows in `index` on column `col`.
pub fn information_gain<T: Category>(data: &Matrix<T>, index: &[usize], col: usize) -> f64 {
    let n = index.len() as f64;
    let child_entropy: f64 = partition(data, index, col)
        .values()
        .map(|rows| (rows.len() as f64 / n) * entropy_from_counts(class_counts(data, rows).values()))
        .sum();
    entropy_from_counts(class_counts(data, index).values()) - child_entropy
}

/// Find the attribute with the largest information gain over the rows in `index`.
///
/// Ties keep the attribute that comes first in column order. A gain that is
/// not positive is still returned, callers decide whether to split on it.
/// Returns `None` only if the data has no attribute columns.
pub fn best_attribute<T: Category>(data: &Matrix<T>, index: &[usize]) -> Option<SplitInfo> {
    let mut best: Option<SplitInfo> = None;
    for col in 1..data.cols {
        let gain = information_gain(data, index, col);
        match best {
            Some(b) if gain <= b.split_gain => (),
            _ => {
                best = Some(SplitInfo {
                    split_feature: col,
                    split_gain: gain,
                })
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::to_column_major;

    fn precision_round(n: f64, decimals: i32) -> f64 {
        let p = 10.0_f64.powi(decimals);
        (n * p).round() / p
    }

    #[test]
    fn test_entropy_pure() {
        for n in 1..10 {
            assert_eq!(entropy(&vec!['A'; n]), 0.);
            assert_eq!(entropy(&vec![7_u8; n]), 0.);
        }
    }

    #[test]
    fn test_entropy_uniform_is_log2_k() {
        let labels = vec![0, 1, 2, 3, 0, 1, 2, 3];
        assert_eq!(precision_round(entropy(&labels), 10), 2.);
        let labels = vec!["a", "b", "c"];
        assert_eq!(precision_round(entropy(&labels), 10), precision_round(3_f64.log2(), 10));
    }

    #[test]
    fn test_entropy_skips_zero_counts() {
        assert_eq!(entropy_from_counts(&[5, 0]), 0.);
        assert_eq!(entropy_from_counts(&[2, 0, 2]), 1.);
        assert_eq!(entropy_from_counts(&[]), 0.);
    }

    #[test]
    fn test_best_attribute() {
        let rows = vec![
            vec!["A", "x1", "y1"],
            vec!["A", "x1", "y2"],
            vec!["B", "x2", "y1"],
        ];
        let (v, cols) = to_column_major(&rows).unwrap();
        let m = Matrix::new(&v, rows.len(), cols);
        let split = best_attribute(&m, &m.index).unwrap();
        assert_eq!(split.split_feature, 1);
        assert_eq!(precision_round(split.split_gain, 3), 0.918);
        assert_eq!(split.split_gain, entropy(&["A", "A", "B"]));
    }

    #[test]
    fn test_best_attribute_tie_keeps_first() {
        // Both attributes are identical copies of each other.
        let rows = vec![vec![0, 1, 1], vec![1, 2, 2], vec![0, 1, 1], vec![1, 2, 2]];
        let (v, cols) = to_column_major(&rows).unwrap();
        let m = Matrix::new(&v, rows.len(), cols);
        let split = best_attribute(&m, &m.index).unwrap();
        assert_eq!(split.split_feature, 1);
        assert_eq!(split.split_gain, 1.);
    }

    #[test]
    fn test_best_attribute_zero_gain() {
        let rows = vec![vec![0, 1], vec![1, 1]];
        let (v, cols) = to_column_major(&rows).unwrap();
        let m = Matrix::new(&v, rows.len(), cols);
        let split = best_attribute(&m, &m.index).unwrap();
        assert_eq!(split.split_feature, 1);
        assert!(split.split_gain <= 0.);
    }

    #[test]
    fn test_best_attribute_no_attributes() {
        let v = vec![0, 1];
        let m = Matrix::new(&v, 2, 1);
        assert_eq!(best_attribute(&m, &m.index), None);
    }
}
