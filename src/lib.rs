//! Arbor
//!
//! Decision trees for categorical data, grown by information gain (ID3)
//! and simplified with reduced-error pruning.
//!
//! ```
//! use arbor::{Matrix, Tree, TreeConfig};
//!
//! // Column major, column 0 is the class label.
//! let data = vec!["A", "A", "B", "x1", "x1", "x2", "y1", "y2", "y1"];
//! let matrix = Matrix::new(&data, 3, 3);
//! let mut tree = Tree::fit(&matrix, &TreeConfig::default()).unwrap();
//! tree.prune();
//! assert_eq!(tree.node_count(), 3);
//! assert_eq!(tree.predict_row(&["", "x2", "y2"]), &"B");
//! ```

// Modules
pub mod config;
pub mod data;
pub mod entropy;
pub mod errors;
pub mod metric;
pub mod node;
pub mod partition;
mod prune;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use config::TreeConfig;
pub use data::{Category, Matrix};
pub use errors::ArborError;
pub use tree::Tree;
