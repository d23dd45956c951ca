use crate::errors::ArborError;

/// Flatten row-major rows into the column-major layout [`crate::Matrix`] reads.
///
/// Returns the buffer along with the number of columns.
pub fn to_column_major<T: Clone>(rows: &[Vec<T>]) -> Result<(Vec<T>, usize), ArborError> {
    let cols = match rows.first() {
        Some(r) => r.len(),
        None => return Ok((Vec::new(), 0)),
    };
    if let Some((i, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(ArborError::RaggedRow(i, r.len(), cols));
    }
    let mut data = Vec::with_capacity(rows.len() * cols);
    for j in 0..cols {
        data.extend(rows.iter().map(|r| r[j].clone()));
    }
    Ok((data, cols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Matrix;

    #[test]
    fn test_to_column_major() {
        let rows = vec![vec![0, 1, 2], vec![3, 4, 5]];
        let (data, cols) = to_column_major(&rows).unwrap();
        assert_eq!(data, vec![0, 3, 1, 4, 2, 5]);
        assert_eq!(cols, 3);
        let m = Matrix::new(&data, rows.len(), cols);
        assert_eq!((0..cols).map(|j| *m.get(1, j)).collect::<Vec<_>>(), rows[1]);
    }

    #[test]
    fn test_to_column_major_ragged() {
        let rows = vec![vec![0, 1], vec![3, 4], vec![5]];
        assert_eq!(to_column_major(&rows), Err(ArborError::RaggedRow(2, 1, 2)));
    }

    #[test]
    fn test_to_column_major_empty() {
        let rows: Vec<Vec<u8>> = Vec::new();
        assert_eq!(to_column_major(&rows).unwrap(), (Vec::new(), 0));
    }
}
