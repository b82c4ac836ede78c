//! Dense square similarity matrix

/// N×N row-major matrix of pairwise similarity scores.
///
/// Built once by the pipeline and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f32>,
}

impl SimilarityMatrix {
    /// Wrap row-major values; `None` unless `values.len() == n * n`
    pub fn from_raw(n: usize, values: Vec<f32>) -> Option<Self> {
        if n.checked_mul(n)? != values.len() {
            return None;
        }
        Some(Self { n, values })
    }

    pub fn empty() -> Self {
        Self {
            n: 0,
            values: Vec::new(),
        }
    }

    /// Number of rows (and columns)
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn row(&self, i: usize) -> Option<&[f32]> {
        if i >= self.n {
            return None;
        }
        Some(&self.values[i * self.n..(i + 1) * self.n])
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        self.row(i).and_then(|row| row.get(j).copied())
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}
