use crate::tree::ClassificationTree;
use std::cmp::max;
use std::fmt::{self, Display};

/// One `| ` per level of depth.
const INDENT: &str = "| ";

/// Which side of its parent's split a node hangs from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Branch {
    Root,
    Then,
    Else,
}

impl Branch {
    fn marker(&self) -> &'static str {
        match self {
            Branch::Root => "",
            Branch::Then => "then ",
            Branch::Else => "else ",
        }
    }
}

/// Renders a fitted classification tree as indented text.
///
/// Borrows the tree together with the feature names its split conditions
/// index and the class labels its leaves predict. Each node becomes one
/// line, indented with one `| ` per level: internal nodes print their
/// split as `if <feature> =< <threshold>: ` behind a `then ` or `else `
/// marker (the root has none), and leaves print `> ` followed by the
/// label whose class count is highest, ties going to the lowest class
/// index. The final line reports the maximum depth the walk reached.
///
/// ```
/// use arbol::{ClassificationTree, TreePrinter, LEAF};
///
/// let tree = ClassificationTree::new(
///     vec![1, LEAF, LEAF],
///     vec![2, LEAF, LEAF],
///     vec![0, -2, -2],
///     vec![0.5, -2.0, -2.0],
///     vec![vec![5.0, 5.0], vec![5.0, 0.0], vec![0.0, 5.0]],
/// );
/// let printer = TreePrinter::new(&tree, &["x"], &["A", "B"]);
/// assert_eq!(
///     printer.render(),
///     "if x =< 0.5: \n| then > A\n| else > B\nTree Depth: 1\n"
/// );
/// ```
pub struct TreePrinter<'a> {
    tree: &'a ClassificationTree,
    feature_names: &'a [&'a str],
    class_labels: &'a [&'a str],
}

impl<'a> TreePrinter<'a> {
    /// Create a new TreePrinter.
    ///
    /// * `tree` - the fitted tree to render.
    /// * `feature_names` - names for the feature indices the splits use.
    /// * `class_labels` - labels for the class indices the leaves predict.
    pub fn new(tree: &'a ClassificationTree, feature_names: &'a [&'a str], class_labels: &'a [&'a str]) -> Self {
        TreePrinter {
            tree,
            feature_names,
            class_labels,
        }
    }

    /// Walk the tree and build the full rendering, one node per line,
    /// left subtree before right, ending with the depth line.
    ///
    /// The walk does no validation: a child or feature index outside the
    /// arrays, or a label list shorter than the class count, panics the
    /// way any out-of-range slice index does.
    pub fn render(&self) -> String {
        let mut print_buffer: Vec<(usize, usize, Branch)> = vec![(0, 0, Branch::Root)];
        let mut r = String::new();
        let mut max_depth = 0;
        while let Some((idx, depth, branch)) = print_buffer.pop() {
            max_depth = max(max_depth, depth);
            r += INDENT.repeat(depth).as_str();
            r += branch.marker();
            if self.tree.is_leaf(idx) {
                let label = self.class_labels[self.tree.predicted_class(idx)];
                r += format!("> {}\n", label).as_str();
            } else {
                let name = self.feature_names[self.tree.feature[idx] as usize];
                r += format!("if {} =< {}: \n", name, self.tree.threshold[idx]).as_str();
                print_buffer.push((self.tree.children_right[idx] as usize, depth + 1, Branch::Else));
                print_buffer.push((self.tree.children_left[idx] as usize, depth + 1, Branch::Then));
            }
        }
        r += format!("Tree Depth: {}\n", max_depth).as_str();
        r
    }
}

impl<'a> Display for TreePrinter<'a> {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Print a fitted tree to standard output, one node per line, followed
/// by the `Tree Depth: ` line.
///
/// * `tree` - the fitted tree to render.
/// * `feature_names` - names for the feature indices the splits use.
/// * `class_labels` - labels for the class indices the leaves predict.
pub fn print_tree(tree: &ClassificationTree, feature_names: &[&str], class_labels: &[&str]) {
    print!("{}", TreePrinter::new(tree, feature_names, class_labels).render());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::LEAF;

    fn single_leaf() -> ClassificationTree {
        ClassificationTree::new(vec![LEAF], vec![LEAF], vec![-2], vec![-2.0], vec![vec![7.0, 3.0]])
    }

    fn stump() -> ClassificationTree {
        ClassificationTree::new(
            vec![1, LEAF, LEAF],
            vec![2, LEAF, LEAF],
            vec![0, -2, -2],
            vec![0.5, -2.0, -2.0],
            vec![vec![5.0, 5.0], vec![5.0, 0.0], vec![0.0, 5.0]],
        )
    }

    fn depth_two() -> ClassificationTree {
        ClassificationTree::new(
            vec![1, LEAF, 3, LEAF, LEAF],
            vec![2, LEAF, 4, LEAF, LEAF],
            vec![0, -2, 1, -2, -2],
            vec![0.5, -2.0, 4.95, -2.0, -2.0],
            vec![
                vec![6.0, 6.0],
                vec![4.0, 1.0],
                vec![2.0, 5.0],
                vec![2.0, 1.0],
                vec![0.0, 4.0],
            ],
        )
    }

    fn depth_three() -> ClassificationTree {
        ClassificationTree::new(
            vec![1, LEAF, 3, LEAF, 5, LEAF, LEAF],
            vec![2, LEAF, 4, LEAF, 6, LEAF, LEAF],
            vec![0, -2, 1, -2, 0, -2, -2],
            vec![0.5, -2.0, 4.95, -2.0, 7.5, -2.0, -2.0],
            vec![
                vec![6.0, 6.0],
                vec![4.0, 1.0],
                vec![2.0, 5.0],
                vec![2.0, 1.0],
                vec![0.0, 4.0],
                vec![0.0, 3.0],
                vec![0.0, 1.0],
            ],
        )
    }

    #[test]
    fn test_render_single_leaf() {
        let tree = single_leaf();
        let printer = TreePrinter::new(&tree, &["x"], &["A", "B"]);
        assert_eq!(printer.render(), "> A\nTree Depth: 0\n");
    }

    #[test]
    fn test_render_stump_byte_for_byte() {
        let tree = stump();
        let printer = TreePrinter::new(&tree, &["x"], &["A", "B"]);
        assert_eq!(
            printer.render(),
            "if x =< 0.5: \n\
             | then > A\n\
             | else > B\n\
             Tree Depth: 1\n"
        );
    }

    #[test]
    fn test_render_depth_two_byte_for_byte() {
        let tree = depth_two();
        let printer = TreePrinter::new(&tree, &["sepal width", "petal length"], &["A", "B"]);
        assert_eq!(
            printer.render(),
            "if sepal width =< 0.5: \n\
             | then > A\n\
             | else if petal length =< 4.95: \n\
             | | then > A\n\
             | | else > B\n\
             Tree Depth: 2\n"
        );
    }

    #[test]
    fn test_render_idempotent() {
        let tree = depth_three();
        let printer = TreePrinter::new(&tree, &["x0", "x1"], &["A", "B"]);
        assert_eq!(printer.render(), printer.render());
    }

    #[test]
    fn test_depth_line_matches_height() {
        for tree in [single_leaf(), stump(), depth_two(), depth_three()] {
            let printer = TreePrinter::new(&tree, &["x0", "x1"], &["A", "B"]);
            let tail = format!("Tree Depth: {}\n", tree.height());
            assert!(printer.render().ends_with(&tail));
        }
    }

    #[test]
    fn test_render_tie_takes_lowest_index_label() {
        let tree = ClassificationTree::new(
            vec![LEAF],
            vec![LEAF],
            vec![-2],
            vec![-2.0],
            vec![vec![4.0, 4.0]],
        );
        let printer = TreePrinter::new(&tree, &[], &["first", "second"]);
        assert_eq!(printer.render(), "> first\nTree Depth: 0\n");
    }

    #[test]
    fn test_render_full_precision_threshold() {
        let tree = ClassificationTree::new(
            vec![1, LEAF, LEAF],
            vec![2, LEAF, LEAF],
            vec![0, -2, -2],
            vec![2.449999988079071, -2.0, -2.0],
            vec![vec![50.0, 50.0], vec![50.0, 0.0], vec![0.0, 50.0]],
        );
        let printer = TreePrinter::new(&tree, &["petal length"], &["setosa", "other"]);
        let text = printer.render();
        assert!(text.starts_with("if petal length =< 2.449999988079071: \n"));
    }

    #[test]
    fn test_display_matches_render() {
        let tree = depth_two();
        let printer = TreePrinter::new(&tree, &["x0", "x1"], &["A", "B"]);
        assert_eq!(format!("{}", printer), printer.render());
    }
}
