//! CART regression tree
//!
//! Variance-reduction splits over raw feature columns. Growth is
//! depth-first by default; setting `max_leaf_nodes` switches to best-first
//! growth so the highest-gain splits claim the leaf budget, matching the
//! semantics of the leaf-bounded trees the original grids searched over.

use crate::{validate_predict, validate_xy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regressor_spi::{ModelError, ParamValue, Regressor, Result, TunableRegressor};

const MIN_GAIN: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SplitterKind {
    /// Exhaustive midpoint thresholds (decision tree, random forest)
    Best,
    /// One uniform random threshold per feature (extra trees)
    Random,
}

#[derive(Debug, Clone)]
pub(crate) struct TreeParams {
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    pub max_leaf_nodes: Option<usize>,
    pub splitter: SplitterKind,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_leaf_nodes: None,
            splitter: SplitterKind::Best,
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// A fitted regression tree over sample indices into the training matrix.
#[derive(Debug, Clone)]
pub(crate) struct Tree {
    nodes: Vec<Node>,
}

struct CandidateSplit {
    feature: usize,
    threshold: f64,
    gain: f64,
    left: Vec<usize>,
    right: Vec<usize>,
}

fn mean_of(y: &[f64], idx: &[usize]) -> f64 {
    idx.iter().map(|&i| y[i]).sum::<f64>() / idx.len() as f64
}

fn sse_of(y: &[f64], idx: &[usize]) -> f64 {
    let n = idx.len() as f64;
    let sum: f64 = idx.iter().map(|&i| y[i]).sum();
    let sumsq: f64 = idx.iter().map(|&i| y[i] * y[i]).sum();
    sumsq - sum * sum / n
}

fn find_split(
    x: &[Vec<f64>],
    y: &[f64],
    idx: &[usize],
    params: &TreeParams,
    rng: &mut StdRng,
) -> Option<CandidateSplit> {
    if idx.len() < params.min_samples_split.max(2) {
        return None;
    }
    let parent_sse = sse_of(y, idx);
    if parent_sse <= MIN_GAIN {
        return None;
    }
    let width = x[idx[0]].len();
    let mut best: Option<CandidateSplit> = None;

    for feature in 0..width {
        let candidate = match params.splitter {
            SplitterKind::Best => best_threshold(x, y, idx, feature, params, parent_sse),
            SplitterKind::Random => random_threshold(x, y, idx, feature, params, parent_sse, rng),
        };
        if let Some(split) = candidate {
            if best.as_ref().map_or(true, |b| split.gain > b.gain) {
                best = Some(split);
            }
        }
    }
    best.filter(|s| s.gain > MIN_GAIN)
}

fn best_threshold(
    x: &[Vec<f64>],
    y: &[f64],
    idx: &[usize],
    feature: usize,
    params: &TreeParams,
    parent_sse: f64,
) -> Option<CandidateSplit> {
    let mut pairs: Vec<(f64, f64)> = idx.iter().map(|&i| (x[i][feature], y[i])).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    let n = pairs.len();
    let total_sum: f64 = pairs.iter().map(|p| p.1).sum();
    let total_sumsq: f64 = pairs.iter().map(|p| p.1 * p.1).sum();

    let mut left_sum = 0.0;
    let mut left_sumsq = 0.0;
    let mut best: Option<(f64, f64)> = None; // (threshold, gain)

    for i in 1..n {
        left_sum += pairs[i - 1].1;
        left_sumsq += pairs[i - 1].1 * pairs[i - 1].1;

        if pairs[i].0 <= pairs[i - 1].0 {
            continue;
        }
        if i < params.min_samples_leaf || n - i < params.min_samples_leaf {
            continue;
        }

        let left_n = i as f64;
        let right_n = (n - i) as f64;
        let right_sum = total_sum - left_sum;
        let right_sumsq = total_sumsq - left_sumsq;
        let left_sse = left_sumsq - left_sum * left_sum / left_n;
        let right_sse = right_sumsq - right_sum * right_sum / right_n;
        let gain = parent_sse - left_sse - right_sse;

        if best.map_or(true, |(_, g)| gain > g) {
            best = Some((0.5 * (pairs[i - 1].0 + pairs[i].0), gain));
        }
    }

    best.map(|(threshold, gain)| {
        let (left, right) = partition(x, idx, feature, threshold);
        CandidateSplit {
            feature,
            threshold,
            gain,
            left,
            right,
        }
    })
}

fn random_threshold(
    x: &[Vec<f64>],
    y: &[f64],
    idx: &[usize],
    feature: usize,
    params: &TreeParams,
    parent_sse: f64,
    rng: &mut StdRng,
) -> Option<CandidateSplit> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &i in idx {
        lo = lo.min(x[i][feature]);
        hi = hi.max(x[i][feature]);
    }
    if hi <= lo {
        return None;
    }

    let threshold = rng.gen_range(lo..hi);
    let (left, right) = partition(x, idx, feature, threshold);
    if left.len() < params.min_samples_leaf || right.len() < params.min_samples_leaf {
        return None;
    }
    let gain = parent_sse - sse_of(y, &left) - sse_of(y, &right);
    Some(CandidateSplit {
        feature,
        threshold,
        gain,
        left,
        right,
    })
}

fn partition(x: &[Vec<f64>], idx: &[usize], feature: usize, threshold: f64) -> (Vec<usize>, Vec<usize>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for &i in idx {
        if x[i][feature] <= threshold {
            left.push(i);
        } else {
            right.push(i);
        }
    }
    (left, right)
}

impl Tree {
    /// Grow a tree over the samples selected by `idx`.
    pub(crate) fn grow(
        x: &[Vec<f64>],
        y: &[f64],
        idx: &[usize],
        params: &TreeParams,
        rng: &mut StdRng,
    ) -> Tree {
        let mut tree = Tree { nodes: Vec::new() };
        match params.max_leaf_nodes {
            Some(max_leaves) => tree.grow_best_first(x, y, idx, params, max_leaves.max(2), rng),
            None => {
                tree.grow_depth_first(x, y, idx, 0, params, rng);
            }
        }
        tree
    }

    fn grow_depth_first(
        &mut self,
        x: &[Vec<f64>],
        y: &[f64],
        idx: &[usize],
        depth: usize,
        params: &TreeParams,
        rng: &mut StdRng,
    ) -> usize {
        let depth_ok = params.max_depth.map_or(true, |d| depth < d);
        if depth_ok {
            if let Some(split) = find_split(x, y, idx, params, rng) {
                let id = self.nodes.len();
                // Placeholder patched once both children exist.
                self.nodes.push(Node::Leaf { value: 0.0 });
                let left = self.grow_depth_first(x, y, &split.left, depth + 1, params, rng);
                let right = self.grow_depth_first(x, y, &split.right, depth + 1, params, rng);
                self.nodes[id] = Node::Split {
                    feature: split.feature,
                    threshold: split.threshold,
                    left,
                    right,
                };
                return id;
            }
        }
        self.nodes.push(Node::Leaf {
            value: mean_of(y, idx),
        });
        self.nodes.len() - 1
    }

    fn grow_best_first(
        &mut self,
        x: &[Vec<f64>],
        y: &[f64],
        idx: &[usize],
        params: &TreeParams,
        max_leaves: usize,
        rng: &mut StdRng,
    ) {
        self.nodes.push(Node::Leaf {
            value: mean_of(y, idx),
        });
        let mut frontier: Vec<(usize, usize, CandidateSplit)> = Vec::new(); // (node, depth, split)
        if params.max_depth.map_or(true, |d| d > 0) {
            if let Some(split) = find_split(x, y, idx, params, rng) {
                frontier.push((0, 0, split));
            }
        }

        let mut leaves = 1;
        while leaves < max_leaves && !frontier.is_empty() {
            let pick = frontier
                .iter()
                .enumerate()
                .max_by(|a, b| a.1 .2.gain.total_cmp(&b.1 .2.gain))
                .map(|(i, _)| i)
                .unwrap_or(0);
            let (node, depth, split) = frontier.swap_remove(pick);

            let left_id = self.nodes.len();
            self.nodes.push(Node::Leaf {
                value: mean_of(y, &split.left),
            });
            let right_id = self.nodes.len();
            self.nodes.push(Node::Leaf {
                value: mean_of(y, &split.right),
            });
            self.nodes[node] = Node::Split {
                feature: split.feature,
                threshold: split.threshold,
                left: left_id,
                right: right_id,
            };
            leaves += 1;

            if params.max_depth.map_or(true, |d| depth + 1 < d) {
                if let Some(next) = find_split(x, y, &split.left, params, rng) {
                    frontier.push((left_id, depth + 1, next));
                }
                if let Some(next) = find_split(x, y, &split.right, params, rng) {
                    frontier.push((right_id, depth + 1, next));
                }
            }
        }
    }

    pub(crate) fn predict_row(&self, row: &[f64]) -> f64 {
        let mut node = 0;
        loop {
            match &self.nodes[node] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[*feature] <= *threshold { *left } else { *right };
                }
            }
        }
    }

    pub(crate) fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }
}

/// CART decision tree regressor
///
/// # Example
///
/// ```rust
/// use regressor_core::DecisionTreeRegressor;
/// use regressor_spi::Regressor;
///
/// let x: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64]).collect();
/// let y: Vec<f64> = (0..20).map(|i| if i < 10 { 1.0 } else { 5.0 }).collect();
///
/// let mut tree = DecisionTreeRegressor::new();
/// tree.fit(&x, &y).unwrap();
/// let preds = tree.predict(&[vec![2.0], vec![15.0]]).unwrap();
/// assert!((preds[0] - 1.0).abs() < 1e-10);
/// assert!((preds[1] - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTreeRegressor {
    params: TreeParams,
    tree: Option<Tree>,
    n_features: usize,
}

impl Default for DecisionTreeRegressor {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTreeRegressor {
    /// Create an unfitted tree with sklearn-era defaults
    pub fn new() -> Self {
        Self {
            params: TreeParams::default(),
            tree: None,
            n_features: 0,
        }
    }

    /// Bound the tree depth
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.params.max_depth = depth;
        self
    }

    /// Bound the number of leaves (switches growth to best-first)
    pub fn with_max_leaf_nodes(mut self, leaves: Option<usize>) -> Self {
        self.params.max_leaf_nodes = leaves;
        self
    }
}

/// Shared parameter parsing for tree-shaped estimators.
pub(crate) fn set_tree_param(params: &mut TreeParams, name: &str, value: &ParamValue) -> Result<()> {
    let invalid = |reason: &str| ModelError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    };
    match name {
        "max_depth" => {
            params.max_depth = if value.is_none() {
                None
            } else {
                Some(value.as_usize().ok_or_else(|| invalid("expected None or a non-negative integer"))?)
            };
        }
        "max_leaf_nodes" => {
            params.max_leaf_nodes = if value.is_none() {
                None
            } else {
                let leaves = value
                    .as_usize()
                    .ok_or_else(|| invalid("expected None or a non-negative integer"))?;
                if leaves < 2 {
                    return Err(invalid("must be at least 2"));
                }
                Some(leaves)
            };
        }
        "min_samples_split" => {
            let v = value.as_usize().ok_or_else(|| invalid("expected a non-negative integer"))?;
            if v < 2 {
                return Err(invalid("must be at least 2"));
            }
            params.min_samples_split = v;
        }
        "min_samples_leaf" => {
            let v = value.as_usize().ok_or_else(|| invalid("expected a non-negative integer"))?;
            if v < 1 {
                return Err(invalid("must be at least 1"));
            }
            params.min_samples_leaf = v;
        }
        _ => return Err(invalid("unknown parameter")),
    }
    Ok(())
}

impl Regressor for DecisionTreeRegressor {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        let width = validate_xy(x, y, 2)?;
        let idx: Vec<usize> = (0..x.len()).collect();
        let mut rng = StdRng::from_entropy();
        self.tree = Some(Tree::grow(x, y, &idx, &self.params, &mut rng));
        self.n_features = width;
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        let tree = self.tree.as_ref().ok_or(ModelError::NotFitted)?;
        validate_predict(x, self.n_features)?;
        Ok(x.iter().map(|row| tree.predict_row(row)).collect())
    }

    fn is_fitted(&self) -> bool {
        self.tree.is_some()
    }
}

impl TunableRegressor for DecisionTreeRegressor {
    fn set_param(&mut self, name: &str, value: &ParamValue) -> Result<()> {
        set_tree_param(&mut self.params, name, value)
    }
}
