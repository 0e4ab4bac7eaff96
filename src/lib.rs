// Modules
pub mod data;
pub mod errors;
pub mod printer;
pub mod tree;

// Individual classes, and functions
pub use data::Matrix;
pub use printer::{print_tree, TreePrinter};
pub use tree::{ClassificationTree, TreeIO, LEAF};
