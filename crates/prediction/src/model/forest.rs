use serde::{Deserialize, Serialize};

use super::{check_width, Classifier};
use crate::constants::CLASS_COUNT;
use crate::errors::{ShapeMismatchError, TreeDefect, ValidationError};

/// Marker stored in `left` / `right` for leaf nodes.
const LEAF: i32 = -1;

/// One array-encoded tree. Node `i` splits on `feature[i]`: rows with
/// `x[feature] <= threshold[i]` go to `left[i]`, the rest to `right[i]`.
/// Leaves carry per-class weights in `value[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub feature: Vec<i32>,
    pub threshold: Vec<f64>,
    pub left: Vec<i32>,
    pub right: Vec<i32>,
    pub value: Vec<[f64; CLASS_COUNT]>,
}

impl DecisionTree {
    pub fn n_nodes(&self) -> usize {
        self.feature.len()
    }

    fn is_leaf(&self, node: usize) -> bool {
        self.left[node] == LEAF
    }

    fn validate(&self, n_features: usize) -> Result<(), TreeDefect> {
        let n = self.n_nodes();
        if n == 0 {
            return Err(TreeDefect::NoNodes);
        }
        if self.threshold.len() != n
            || self.left.len() != n
            || self.right.len() != n
            || self.value.len() != n
        {
            return Err(TreeDefect::InconsistentLengths);
        }

        for node in 0..n {
            let (left, right) = (self.left[node], self.right[node]);
            if left == LEAF || right == LEAF {
                if left != right {
                    return Err(TreeDefect::SingleChild { node });
                }
                let weights = &self.value[node];
                if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
                    return Err(TreeDefect::InvalidLeafWeights { node });
                }
                if weights.iter().sum::<f64>() <= 0.0 {
                    return Err(TreeDefect::EmptyLeaf { node });
                }
                continue;
            }

            // Children always sit after their parent, which rules out cycles.
            for child in [left, right] {
                if child <= node as i32 || child as usize >= n {
                    return Err(TreeDefect::InvalidChild { node, child });
                }
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(TreeDefect::UnknownFeature { node, feature });
            }
            if !self.threshold[node].is_finite() {
                return Err(TreeDefect::NonFiniteThreshold { node });
            }
        }
        Ok(())
    }

    /// Normalized class distribution of the leaf `row` lands in.
    fn leaf_distribution(&self, row: &[f64]) -> [f64; CLASS_COUNT] {
        let mut node = 0usize;
        while !self.is_leaf(node) {
            let x = row[self.feature[node] as usize];
            node = if x <= self.threshold[node] {
                self.left[node] as usize
            } else {
                self.right[node] as usize
            };
        }
        let weights = self.value[node];
        let total: f64 = weights.iter().sum();
        [weights[0] / total, weights[1] / total]
    }
}

/// Ensemble of [`DecisionTree`]s; probabilities are the mean leaf distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    #[serde(default)]
    pub model_id: String,
    pub n_features: usize,
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.n_features == 0 {
            return Err(ValidationError::ZeroFeatures);
        }
        if self.trees.is_empty() {
            return Err(ValidationError::EmptyForest);
        }
        for (tree, t) in self.trees.iter().enumerate() {
            t.validate(self.n_features)
                .map_err(|defect| ValidationError::Tree { tree, defect })?;
        }
        Ok(())
    }
}

impl Classifier for RandomForest {
    fn kind_name(&self) -> &'static str {
        "random_forest"
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_proba(&self, row: &[f64]) -> Result<[f64; 2], ShapeMismatchError> {
        check_width(self.n_features, row)?;
        let fire_sum: f64 = self
            .trees
            .iter()
            .map(|tree| tree.leaf_distribution(row)[1])
            .sum();
        let fire = fire_sum / self.trees.len() as f64;
        Ok([1.0 - fire, fire])
    }
}
