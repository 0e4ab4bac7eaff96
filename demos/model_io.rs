//! Model Save / Load Round Trip
//! ============================
//! A survival tree in the shape of the classic titanic example, written
//! to disk as json, loaded back, and rendered from both copies to show
//! the text is unchanged.
//!
//! ```bash
//! cargo run --example model_io
//! ```

use arbol::{ClassificationTree, TreePrinter, TreeIO, LEAF};
use std::env;
use std::error::Error;

const FEATURE_NAMES: [&str; 3] = ["sex", "pclass", "age"];
const CLASS_LABELS: [&str; 2] = ["died", "survived"];

fn main() -> Result<(), Box<dyn Error>> {
    // ------------------------------------------------------------------
    // 1. The fitted tree: sex first, then class for women and age for men.
    // ------------------------------------------------------------------
    let tree = ClassificationTree::new(
        vec![1, 2, LEAF, LEAF, 5, LEAF, LEAF],
        vec![4, 3, LEAF, LEAF, 6, LEAF, LEAF],
        vec![0, 1, -2, -2, 2, -2, -2],
        vec![0.5, 2.5, -2.0, -2.0, 6.5, -2.0, -2.0],
        vec![
            vec![549.0, 342.0],
            vec![81.0, 233.0],
            vec![9.0, 161.0],
            vec![72.0, 72.0],
            vec![468.0, 109.0],
            vec![8.0, 16.0],
            vec![460.0, 93.0],
        ],
    );

    let printed = TreePrinter::new(&tree, &FEATURE_NAMES, &CLASS_LABELS).render();
    println!("{}", printed);

    // ------------------------------------------------------------------
    // 2. Round trip through a json file.
    // ------------------------------------------------------------------
    let path = env::temp_dir().join("titanic_tree.json");
    tree.save_tree(&path)?;
    let loaded = ClassificationTree::load_tree(&path)?;
    println!("saved and reloaded {}", path.display());

    let reprinted = TreePrinter::new(&loaded, &FEATURE_NAMES, &CLASS_LABELS).render();
    assert_eq!(printed, reprinted);
    println!("rendered text identical after the round trip");

    Ok(())
}
