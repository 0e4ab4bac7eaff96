//! Iris Tree Rendering
//! ===================
//! Classic machine-learning example: a decision tree fitted on the Iris
//! dataset (150 flowers, three species), entered here as the node arrays
//! the training library exported. The program renders the tree as text
//! and re-classifies a few measurements against it.
//!
//! ```bash
//! cargo run --example iris
//! ```

use arbol::{print_tree, ClassificationTree, LEAF};

const FEATURE_NAMES: [&str; 4] = [
    "sepal length (cm)",
    "sepal width (cm)",
    "petal length (cm)",
    "petal width (cm)",
];

const CLASS_LABELS: [&str; 3] = ["setosa", "versicolor", "virginica"];

/// Accuracy = correct / total
fn accuracy(y_true: &[usize], y_pred: &[usize]) -> f64 {
    let correct = y_true.iter().zip(y_pred).filter(|&(t, p)| t == p).count();
    correct as f64 / y_true.len() as f64
}

fn main() {
    // ------------------------------------------------------------------
    // 1. The fitted tree: petal length separates setosa from the rest,
    //    petal width and length split versicolor from virginica.
    // ------------------------------------------------------------------
    let tree = ClassificationTree::new(
        vec![1, LEAF, 3, 4, LEAF, LEAF, LEAF],
        vec![2, LEAF, 6, 5, LEAF, LEAF, LEAF],
        vec![2, -2, 3, 2, -2, -2, -2],
        vec![2.45, -2.0, 1.75, 4.95, -2.0, -2.0, -2.0],
        vec![
            vec![50.0, 50.0, 50.0],
            vec![50.0, 0.0, 0.0],
            vec![0.0, 50.0, 50.0],
            vec![0.0, 49.0, 5.0],
            vec![0.0, 47.0, 1.0],
            vec![0.0, 2.0, 4.0],
            vec![0.0, 1.0, 45.0],
        ],
    );

    println!("Fitted tree ({} nodes, {} leaves):\n", tree.n_nodes(), tree.n_leaves());
    print_tree(&tree, &FEATURE_NAMES, &CLASS_LABELS);

    // ------------------------------------------------------------------
    // 2. Classify a handful of flowers, one row of measurements each.
    // ------------------------------------------------------------------
    let samples = [
        [5.1, 3.5, 1.4, 0.2],
        [6.4, 3.2, 4.5, 1.5],
        [5.9, 3.0, 5.1, 1.8],
        [6.7, 3.1, 4.7, 1.5],
    ];
    let y_true = [0, 1, 2, 1];

    println!();
    let mut y_pred = Vec::new();
    for (row, label) in samples.iter().zip(y_true) {
        let pred = tree.predict_row_from_row_slice(row);
        y_pred.push(pred);
        println!(
            "petal {:.1} x {:.1} cm -> {} (expected {})",
            row[2], row[3], CLASS_LABELS[pred], CLASS_LABELS[label]
        );
    }
    println!("accuracy: {:.3}", accuracy(&y_true, &y_pred));

    // ------------------------------------------------------------------
    // 3. Which features carry the splits.
    // ------------------------------------------------------------------
    let mut counts: Vec<(usize, usize)> = tree.feature_split_counts().into_iter().collect();
    counts.sort();
    println!();
    for (feature, n) in counts {
        println!("{} splits on {}", n, FEATURE_NAMES[feature]);
    }
}
