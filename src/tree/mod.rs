pub mod iter;
pub mod predict;
pub mod tree;

pub use iter::BreadthFirst;
pub use tree::{Tree, ROOT};
