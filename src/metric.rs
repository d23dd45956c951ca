use crate::data::Category;
use crate::errors::ArborError;
use std::collections::{BTreeMap, BTreeSet};

fn check_lengths<T>(actual: &[T], predicted: &[T]) -> Result<(), ArborError> {
    if actual.len() != predicted.len() {
        return Err(ArborError::LengthMismatch(actual.len(), predicted.len()));
    }
    if actual.is_empty() {
        return Err(ArborError::EmptyDataset);
    }
    Ok(())
}

/// Fraction of positions where the predicted label equals the actual one.
pub fn accuracy<T: PartialEq>(actual: &[T], predicted: &[T]) -> Result<f64, ArborError> {
    check_lengths(actual, predicted)?;
    let correct = actual.iter().zip(predicted).filter(|(a, p)| a == p).count();
    Ok(correct as f64 / actual.len() as f64)
}

/// Counts of actual (rows) against predicted (columns) labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix<T> {
    /// Every label seen in either sequence, ascending.
    pub labels: Vec<T>,
    pub counts: Vec<Vec<usize>>,
}

impl<T: Category> ConfusionMatrix<T> {
    /// Number of rows with label `actual` that were predicted as `predicted`.
    pub fn get(&self, actual: &T, predicted: &T) -> usize {
        let i = self.labels.binary_search(actual);
        let j = self.labels.binary_search(predicted);
        match (i, j) {
            (Ok(i), Ok(j)) => self.counts[i][j],
            _ => 0,
        }
    }
}

pub fn confusion_matrix<T: Category>(actual: &[T], predicted: &[T]) -> Result<ConfusionMatrix<T>, ArborError> {
    check_lengths(actual, predicted)?;
    let labels: Vec<T> = actual
        .iter()
        .chain(predicted)
        .cloned()
        .collect::<BTreeSet<T>>()
        .into_iter()
        .collect();
    let position: BTreeMap<&T, usize> = labels.iter().enumerate().map(|(i, l)| (l, i)).collect();
    let mut counts = vec![vec![0; labels.len()]; labels.len()];
    for (a, p) in actual.iter().zip(predicted) {
        counts[position[a]][position[p]] += 1;
    }
    Ok(ConfusionMatrix { labels, counts })
}
