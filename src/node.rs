use crate::data::Category;
use crate::entropy::SplitInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A node of the tree, stored in the tree's arena under `num`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Node<T: Category> {
    pub num: usize,
    /// Number of the node that created this one, `None` for the root.
    pub parent_node: Option<usize>,
    pub depth: usize,
    /// Training rows reaching this node, counted per class label.
    pub class_counts: BTreeMap<T, usize>,
    /// Most frequent label in `class_counts`, lowest label on ties.
    pub majority_class: T,
    /// Attribute column tested by an internal node.
    pub split_attribute: Option<usize>,
    pub split_gain: f64,
    /// Attribute value to child node number.
    pub children: BTreeMap<T, usize>,
}

impl<T: Category> Node<T> {
    /// Create a leaf from the class counts of the rows that reach it.
    ///
    /// Returns `None` if `class_counts` is empty.
    pub fn new(num: usize, parent_node: Option<usize>, depth: usize, class_counts: BTreeMap<T, usize>) -> Option<Self> {
        let majority_class = majority_class(&class_counts)?.clone();
        Some(Node {
            num,
            parent_node,
            depth,
            class_counts,
            majority_class,
            split_attribute: None,
            split_gain: 0.,
            children: BTreeMap::new(),
        })
    }

    /// Turn this node into a decision node over `children`.
    pub fn make_parent_node(&mut self, split_info: &SplitInfo, children: BTreeMap<T, usize>) {
        self.split_attribute = Some(split_info.split_feature);
        self.split_gain = split_info.split_gain;
        self.children = children;
    }

    /// Drop the children, the node predicts its majority class from now on.
    ///
    /// Returns the numbers of the detached children.
    pub fn make_leaf_node(&mut self) -> Vec<usize> {
        self.split_attribute = None;
        self.split_gain = 0.;
        std::mem::take(&mut self.children).into_values().collect()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// All training rows have the same class.
    pub fn is_pure(&self) -> bool {
        self.class_counts.len() <= 1
    }

    /// Number of training rows that reached this node.
    pub fn n_samples(&self) -> usize {
        self.class_counts.values().sum()
    }

    /// Training rows misclassified if this node predicts its majority class.
    pub fn n_errors(&self) -> usize {
        self.n_samples() - self.class_counts.values().max().copied().unwrap_or(0)
    }

    /// Fraction of training rows misclassified if this node were a leaf.
    pub fn error_rate(&self) -> f64 {
        match self.n_samples() {
            0 => 0.,
            n => self.n_errors() as f64 / n as f64,
        }
    }

    /// Get the child to travel down for a value of the split attribute,
    /// `None` if the value was never seen at this node during training.
    pub fn get_child_idx(&self, v: &T) -> Option<usize> {
        self.children.get(v).copied()
    }
}

/// Label with the highest count, the first one in label order on ties.
pub fn majority_class<T: Category>(class_counts: &BTreeMap<T, usize>) -> Option<&T> {
    let mut best: Option<(&T, usize)> = None;
    for (label, count) in class_counts {
        match best {
            Some((_, c)) if *count <= c => (),
            _ => best = Some((label, *count)),
        }
    }
    best.map(|(label, _)| label)
}

impl<T: Category> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.split_attribute {
            Some(attr) if !self.is_leaf() => {
                let children: Vec<String> = self.children.iter().map(|(v, n)| format!("{:?}={}", v, n)).collect();
                write!(
                    f,
                    "{}:[attr {}] {},gain={},class={:?},counts={:?}",
                    self.num,
                    attr,
                    children.join(","),
                    self.split_gain,
                    self.majority_class,
                    self.class_counts
                )
            }
            _ => write!(f, "{}:leaf={:?},counts={:?}", self.num, self.majority_class, self.class_counts),
        }
    }
}
