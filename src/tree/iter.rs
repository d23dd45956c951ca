use super::tree::{Tree, ROOT};
use crate::data::Category;
use crate::node::Node;
use std::collections::VecDeque;

/// Breadth first walk over a tree, started at the root.
///
/// A node is yielded before any of its children, and children are queued
/// in ascending order of the attribute value leading to them.
pub struct BreadthFirst<'a, T: Category> {
    tree: &'a Tree<T>,
    queue: VecDeque<usize>,
}

impl<'a, T: Category> BreadthFirst<'a, T> {
    pub fn new(tree: &'a Tree<T>) -> Self {
        BreadthFirst {
            tree,
            queue: VecDeque::from([ROOT]),
        }
    }
}

impl<'a, T: Category> Iterator for BreadthFirst<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.queue.pop_front()?;
        let node = self.tree.nodes.get(&idx)?;
        self.queue.extend(node.children.values());
        Some(node)
    }
}
