use crate::data::{Matrix, RowMajorMatrix};
use crate::errors::ArbolError;
use log::info;
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cmp::max;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Child index marking the absence of a child. A node whose children are
/// both `LEAF` is a leaf.
pub const LEAF: i32 = -1;

/// A fitted binary classification tree, stored as the parallel node
/// arrays training libraries expose.
///
/// Node `i` has children `children_left[i]` and `children_right[i]`
/// (`LEAF` when absent), tests feature `feature[i]` against
/// `threshold[i]` when internal, and carries the per-class sample counts
/// that reached it in row `i` of `value`. The root is node 0, and every
/// node has zero or two children. `feature` and `threshold` are only
/// meaningful on internal nodes; exporters commonly write -2 there for
/// leaves and the arrays keep whatever they were given.
#[derive(Deserialize, Serialize, Clone)]
pub struct ClassificationTree {
    pub children_left: Vec<i32>,
    pub children_right: Vec<i32>,
    pub feature: Vec<i32>,
    pub threshold: Vec<f64>,
    pub value: RowMajorMatrix<f64>,
}

impl ClassificationTree {
    /// Assemble a tree from its node arrays.
    ///
    /// * `value` - one row of per-class sample counts per node.
    pub fn new(
        children_left: Vec<i32>,
        children_right: Vec<i32>,
        feature: Vec<i32>,
        threshold: Vec<f64>,
        value: Vec<Vec<f64>>,
    ) -> Self {
        let n_classes = value.first().map_or(0, |row| row.len());
        let mut counts = RowMajorMatrix::new(Vec::new(), 0, n_classes);
        for row in value {
            counts.append_row(row);
        }
        ClassificationTree {
            children_left,
            children_right,
            feature,
            threshold,
            value: counts,
        }
    }

    /// Number of nodes in the tree.
    pub fn n_nodes(&self) -> usize {
        self.children_left.len()
    }

    /// Number of classes in the count table.
    pub fn n_classes(&self) -> usize {
        self.value.cols
    }

    /// Whether node `i` is a leaf.
    pub fn is_leaf(&self, i: usize) -> bool {
        self.children_left[i] == LEAF && self.children_right[i] == LEAF
    }

    /// Number of leaves in the tree.
    pub fn n_leaves(&self) -> usize {
        (0..self.n_nodes()).filter(|&i| self.is_leaf(i)).count()
    }

    /// Number of edges on the longest root-to-leaf path. A tree that is
    /// a single leaf has height 0.
    pub fn height(&self) -> usize {
        self.node_height(0)
    }

    fn node_height(&self, i: usize) -> usize {
        if self.is_leaf(i) {
            0
        } else {
            let left = self.node_height(self.children_left[i] as usize);
            let right = self.node_height(self.children_right[i] as usize);
            1 + max(left, right)
        }
    }

    /// Class index with the highest count at node `i`. Ties go to the
    /// lowest index.
    pub fn predicted_class(&self, i: usize) -> usize {
        let row = self.value.get_row(i);
        let mut best = 0;
        for j in 1..row.len() {
            if row[j] > row[best] {
                best = j;
            }
        }
        best
    }

    fn predict_row(&self, data: &Matrix<f64>, row: usize) -> usize {
        let mut node_idx = 0;
        loop {
            if self.is_leaf(node_idx) {
                return self.predicted_class(node_idx);
            }
            let split_feature = self.feature[node_idx] as usize;
            node_idx = if *data.get(row, split_feature) <= self.threshold[node_idx] {
                self.children_left[node_idx] as usize
            } else {
                self.children_right[node_idx] as usize
            };
        }
    }

    /// Route a single sample to its leaf, returning the predicted class
    /// index.
    pub fn predict_row_from_row_slice(&self, row: &[f64]) -> usize {
        let mut node_idx = 0;
        loop {
            if self.is_leaf(node_idx) {
                return self.predicted_class(node_idx);
            }
            node_idx = if row[self.feature[node_idx] as usize] <= self.threshold[node_idx] {
                self.children_left[node_idx] as usize
            } else {
                self.children_right[node_idx] as usize
            };
        }
    }

    fn predict_single_threaded(&self, data: &Matrix<f64>) -> Vec<usize> {
        data.index.iter().map(|i| self.predict_row(data, *i)).collect()
    }

    fn predict_parallel(&self, data: &Matrix<f64>) -> Vec<usize> {
        data.index.par_iter().map(|i| self.predict_row(data, *i)).collect()
    }

    /// Predict the class index of every sample in `data`.
    ///
    /// * `data` - samples to score, one per row.
    /// * `parallel` - whether to fan the rows out over a thread pool.
    pub fn predict(&self, data: &Matrix<f64>, parallel: bool) -> Vec<usize> {
        if parallel {
            self.predict_parallel(data)
        } else {
            self.predict_single_threaded(data)
        }
    }

    /// Count how many internal nodes split on each feature index.
    pub fn feature_split_counts(&self) -> HashMap<usize, usize> {
        let mut stats: HashMap<usize, usize> = HashMap::new();
        for i in 0..self.n_nodes() {
            if !self.is_leaf(i) {
                stats
                    .entry(self.feature[i] as usize)
                    .and_modify(|c| *c += 1)
                    .or_insert(1);
            }
        }
        stats
    }
}

/// IO
pub trait TreeIO: Serialize + DeserializeOwned + Sized {
    /// Save a tree as a json object to a file.
    ///
    /// * `path` - Path to save tree.
    fn save_tree<P: AsRef<Path>>(&self, path: P) -> Result<(), ArbolError> {
        info!("writing model to {}", path.as_ref().display());
        fs::write(path, self.json_dump()?).map_err(|e| ArbolError::UnableToWrite(e.to_string()))
    }

    /// Dump a tree as a json object
    fn json_dump(&self) -> Result<String, ArbolError> {
        serde_json::to_string(self).map_err(|e| ArbolError::UnableToWrite(e.to_string()))
    }

    /// Load a tree from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, ArbolError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| ArbolError::UnableToRead(e.to_string()))
    }

    /// Load a tree from a path to a json tree object.
    ///
    /// * `path` - Path to load tree from.
    fn load_tree<P: AsRef<Path>>(path: P) -> Result<Self, ArbolError> {
        info!("reading model from {}", path.as_ref().display());
        let json_str = fs::read_to_string(path).map_err(|e| ArbolError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl TreeIO for ClassificationTree {}
