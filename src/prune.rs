use crate::data::{Category, Matrix};
use crate::errors::ArborError;
use crate::tree::Tree;
use hashbrown::HashMap;
use log::{debug, info};

impl<T: Category> Tree<T> {
    /// Reduced-error pruning against the training counts held in the nodes.
    ///
    /// A decision node is turned into a leaf when its children, taken as
    /// leaves, misclassify strictly more training rows than the node would
    /// on its own.
    pub fn prune(&mut self) {
        let node_errors: HashMap<usize, usize> = self.nodes.iter().map(|(k, n)| (*k, n.n_errors())).collect();
        self.collapse_nodes(&node_errors, &HashMap::new());
    }

    /// Reduced-error pruning against a held-out dataset.
    ///
    /// Every row in `data.index` is routed through the tree as built, and each
    /// node on its path is charged an error if its majority class differs from
    /// the row's label. Rows that stop at a decision node, because it has no
    /// child for their value, are charged to that node's children.
    pub fn prune_with_data(&mut self, data: &Matrix<T>) -> Result<(), ArborError> {
        data.validate()?;
        if data.index.is_empty() {
            return Err(ArborError::EmptyDataset);
        }
        let mut node_errors: HashMap<usize, usize> = self.nodes.keys().map(|k| (*k, 0)).collect();
        let mut stopped_errors: HashMap<usize, usize> = HashMap::new();
        for row in data.index.iter() {
            let label = data.label(*row);
            let last = self.descend(
                |attr| (attr < data.cols).then(|| data.get(*row, attr)),
                |node| *node_errors.entry(node.num).or_insert(0) += (node.majority_class != *label) as usize,
            );
            if !last.is_leaf() && last.majority_class != *label {
                *stopped_errors.entry(last.num).or_insert(0) += 1;
            }
        }
        self.collapse_nodes(&node_errors, &stopped_errors);
        Ok(())
    }

    /// Visit decision nodes in reverse breadth first order, once, and collapse
    /// the ones whose children make more errors than they do.
    ///
    /// Error rates at a node share the node's row count as denominator, so
    /// the counts are compared directly.
    fn collapse_nodes(&mut self, node_errors: &HashMap<usize, usize>, stopped_errors: &HashMap<usize, usize>) {
        let old_length = self.node_count();

        let order: Vec<usize> = self.nodes().map(|n| n.num).collect();
        for node_idx in order.into_iter().rev() {
            let node = match self.nodes.get(&node_idx) {
                Some(n) if !n.is_leaf() => n,
                _ => continue,
            };
            let node_error = errors_at(node_errors, node_idx);
            let children_error = node
                .children
                .values()
                .map(|c| errors_at(node_errors, *c))
                .sum::<usize>()
                + errors_at(stopped_errors, node_idx);
            if children_error > node_error {
                debug!(
                    "Collapsing node {}: {} errors as a leaf, {} with children",
                    node_idx, node_error, children_error
                );
                if let Some(node) = self.nodes.get_mut(&node_idx) {
                    let detached = node.make_leaf_node();
                    self.remove_children(detached);
                }
            }
        }

        info!("pruning: n_nodes: {} -> {}", old_length, self.node_count());
    }
}

fn errors_at(errors: &HashMap<usize, usize>, idx: usize) -> usize {
    errors.get(&idx).copied().unwrap_or(0)
}
