use crate::data::{Category, Matrix};
use std::collections::BTreeMap;

/// Group the rows in `index` by the value they carry in column `col`.
///
/// Keys are exactly the distinct values present among those rows, in
/// ascending order, and every group keeps the relative order of `index`.
/// No group is ever empty.
pub fn partition<T: Category>(data: &Matrix<T>, index: &[usize], col: usize) -> BTreeMap<T, Vec<usize>> {
    let mut groups: BTreeMap<T, Vec<usize>> = BTreeMap::new();
    for i in index {
        let v = data.get(*i, col);
        match groups.get_mut(v) {
            Some(rows) => rows.push(*i),
            None => {
                groups.insert(v.clone(), vec![*i]);
            }
        }
    }
    groups
}
