use crate::config::TreeConfig;
use crate::data::{Category, Matrix};
use crate::entropy::{best_attribute, class_counts};
use crate::errors::ArborError;
use crate::node::Node;
use crate::partition::partition;
use crate::tree::iter::BreadthFirst;
use hashbrown::{HashMap, HashSet};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::fs;
use std::path::Path;

/// Number of the root node in every tree.
pub const ROOT: usize = 0;

/// A decision tree grown by information gain.
///
/// Nodes live in an arena keyed by their number. A node owns its subtree
/// through the numbers in its `children` map, the `parent_node` link only
/// points back up.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Tree<T: Category> {
    pub nodes: HashMap<usize, Node<T>>,
}

impl<T: Category> Tree<T> {
    /// Grow a tree over the rows of `data.index`.
    ///
    /// Column 0 of `data` is the class label, every other column is a
    /// candidate attribute.
    pub fn fit(data: &Matrix<T>, config: &TreeConfig) -> Result<Self, ArborError> {
        config.validate()?;
        data.validate()?;
        let root = Node::new(ROOT, None, 0, class_counts(data, &data.index)).ok_or(ArborError::EmptyDataset)?;

        let mut nodes = HashMap::new();
        nodes.insert(ROOT, root);
        let mut n_nodes = 1;

        // Nodes still to be evaluated, with the rows that reached them.
        let mut growable: Vec<(usize, Vec<usize>)> = vec![(ROOT, data.index.clone())];
        while let Some((n_idx, index)) = growable.pop() {
            let node: &Node<T> = &nodes[&n_idx];
            if node.is_pure() {
                continue;
            }
            if config.max_depth.is_some_and(|d| node.depth >= d) {
                continue;
            }
            let split_info = match best_attribute(data, &index) {
                Some(s) if s.split_gain > config.min_gain => s,
                _ => continue,
            };
            debug!(
                "Splitting node {} on attribute {} with gain {}",
                n_idx, split_info.split_feature, split_info.split_gain
            );

            let depth = node.depth + 1;
            let mut children = BTreeMap::new();
            for (value, rows) in partition(data, &index, split_info.split_feature) {
                let child = Node::new(n_nodes, Some(n_idx), depth, class_counts(data, &rows))
                    .ok_or(ArborError::EmptyDataset)?;
                children.insert(value, n_nodes);
                nodes.insert(n_nodes, child);
                growable.push((n_nodes, rows));
                n_nodes += 1;
            }
            if let Some(node) = nodes.get_mut(&n_idx) {
                node.make_parent_node(&split_info, children);
            }
        }

        let mut tree = Tree { nodes };
        info!(
            "Fit tree on {} rows: n_nodes: {}, height: {}",
            data.index.len(),
            tree.node_count(),
            tree.height()
        );
        if config.prune {
            tree.prune();
        }
        Ok(tree)
    }

    pub fn root(&self) -> &Node<T> {
        &self.nodes[&ROOT]
    }

    /// Iterate over every node reachable from the root in breadth first order.
    pub fn nodes(&self) -> BreadthFirst<'_, T> {
        BreadthFirst::new(self)
    }

    /// Number of edges on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(ROOT, 0)];
        while let Some((idx, h)) = stack.pop() {
            height = height.max(h);
            stack.extend(self.nodes[&idx].children.values().map(|c| (*c, h + 1)));
        }
        height
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    pub fn n_leaves(&self) -> usize {
        self.nodes().filter(|n| n.is_leaf()).count()
    }

    /// Detach a node, and its subtree, from its parent.
    ///
    /// Returns the number of the parent, the root can not be removed
    /// so for it this does nothing and returns `None`.
    pub fn remove_node(&mut self, node_idx: usize) -> Option<usize> {
        let parent_idx = self.nodes.get(&node_idx)?.parent_node?;
        let parent = self.nodes.get_mut(&parent_idx)?;
        parent.children.retain(|_, c| *c != node_idx);
        self.remove_children(vec![node_idx]);
        Some(parent_idx)
    }

    /// Every child number must name a node whose `parent_node` is the node
    /// listing it, and no node may be reached twice from the root.
    fn check_links(&self) -> Result<(), String> {
        match self.nodes.get(&ROOT) {
            None => return Err("tree has no root node".to_string()),
            Some(root) if root.parent_node.is_some() => return Err("root node has a parent".to_string()),
            Some(_) => (),
        }
        let mut visited = HashSet::new();
        visited.insert(ROOT);
        let mut stack = vec![ROOT];
        while let Some(idx) = stack.pop() {
            for c in self.nodes[&idx].children.values() {
                let child = self
                    .nodes
                    .get(c)
                    .ok_or_else(|| format!("node {} has missing child {}", idx, c))?;
                if !visited.insert(*c) {
                    return Err(format!("node {} is reached more than once", c));
                }
                if child.parent_node != Some(idx) {
                    return Err(format!("node {} is listed as a child of {}, not its parent", c, idx));
                }
                stack.push(*c);
            }
        }
        Ok(())
    }

    /// Drop these nodes and everything below them from the arena.
    pub(crate) fn remove_children(&mut self, mut stack: Vec<usize>) {
        while let Some(idx) = stack.pop() {
            if let Some(removed_node) = self.nodes.remove(&idx) {
                stack.extend(removed_node.children.into_values());
            }
        }
    }
}

impl<T: Category + Serialize> Tree<T> {
    /// Save a tree as a json object to a file.
    ///
    /// * `path` - Path to save tree.
    pub fn save_tree<P: AsRef<Path>>(&self, path: P) -> Result<(), ArborError> {
        let model = self.json_dump()?;
        match fs::write(path, model) {
            Err(e) => Err(ArborError::UnableToWrite(e.to_string())),
            Ok(_) => Ok(()),
        }
    }

    /// Dump a tree as a json object
    pub fn json_dump(&self) -> Result<String, ArborError> {
        serde_json::to_string(self).map_err(|e| ArborError::UnableToWrite(e.to_string()))
    }
}

impl<T: Category + DeserializeOwned> Tree<T> {
    /// Load a tree from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    pub fn from_json(json_str: &str) -> Result<Self, ArborError> {
        let model = serde_json::from_str::<Tree<T>>(json_str).map_err(|e| ArborError::UnableToRead(e.to_string()))?;
        model.check_links().map_err(ArborError::UnableToRead)?;
        Ok(model)
    }

    /// Load a tree from a path to a json tree object.
    ///
    /// * `path` - Path to load tree from.
    pub fn load_tree<P: AsRef<Path>>(path: P) -> Result<Self, ArborError> {
        let json_str = fs::read_to_string(path).map_err(|e| ArborError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl<T: Category> Display for Tree<T> {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<usize> = vec![ROOT];
        let mut r = String::new();
        while let Some(idx) = print_buffer.pop() {
            let node = &self.nodes[&idx];
            r += format!("{}{}\n", "      ".repeat(node.depth).as_str(), node).as_str();
            print_buffer.extend(node.children.values().rev());
        }
        write!(f, "{}", r)
    }
}
