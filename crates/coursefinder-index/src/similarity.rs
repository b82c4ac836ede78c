//! All-pairs cosine similarity over count vectors

use crate::vectorize::CountVectors;
use coursefinder_core::SimilarityMatrix;
use rayon::prelude::*;
use tracing::warn;

fn dot(a: &[(usize, u32)], b: &[(usize, u32)]) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += f64::from(a[i].1) * f64::from(b[j].1);
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

fn norm(v: &[(usize, u32)]) -> f64 {
    v.iter()
        .map(|&(_, c)| f64::from(c) * f64::from(c))
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity of two sparse count vectors; 0 when either is all zeros
pub fn cosine(a: &[(usize, u32)], b: &[(usize, u32)]) -> f32 {
    let denom = norm(a) * norm(b);
    if denom == 0.0 {
        return 0.0;
    }
    (dot(a, b) / denom).clamp(0.0, 1.0) as f32
}

/// Upper-triangle scores of row `i`, columns `i..n`
fn upper_row(rows: &[&[(usize, u32)]], norms: &[f64], i: usize) -> Vec<f32> {
    (i..rows.len())
        .map(|j| {
            if norms[i] == 0.0 || norms[j] == 0.0 {
                0.0
            } else if i == j {
                1.0
            } else {
                (dot(rows[i], rows[j]) / (norms[i] * norms[j])).clamp(0.0, 1.0) as f32
            }
        })
        .collect()
}

/// N×N cosine similarity matrix.
///
/// Each pair is computed once and mirrored, so the result is exactly
/// symmetric. The diagonal is 1, or 0 for an all-zero vector.
pub fn cosine_matrix(vectors: &CountVectors, parallel: bool) -> SimilarityMatrix {
    let n = vectors.len();
    let rows: Vec<&[(usize, u32)]> = (0..n)
        .map(|i| vectors.sparse_row(i).unwrap_or(&[]))
        .collect();
    let norms: Vec<f64> = rows.iter().map(|r| norm(r)).collect();

    let empty = norms.iter().filter(|&&x| x == 0.0).count();
    if empty > 0 {
        warn!(empty, "documents with no vocabulary tokens get zero similarity");
    }

    let upper: Vec<Vec<f32>> = if parallel {
        (0..n)
            .into_par_iter()
            .map(|i| upper_row(&rows, &norms, i))
            .collect()
    } else {
        (0..n).map(|i| upper_row(&rows, &norms, i)).collect()
    };

    let mut values = vec![0.0f32; n * n];
    for (i, row) in upper.iter().enumerate() {
        for (offset, &score) in row.iter().enumerate() {
            let j = i + offset;
            values[i * n + j] = score;
            values[j * n + i] = score;
        }
    }

    SimilarityMatrix::from_raw(n, values).unwrap_or_else(SimilarityMatrix::empty)
}
