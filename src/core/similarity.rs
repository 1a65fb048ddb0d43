/// Cosine similarity between two vectors from the same feature space
///
/// Returns exactly 0.0 when either vector has zero norm (empty documents
/// vectorize to zero vectors and must never score 1.0 or NaN against
/// anything), and 0.0 for mismatched or zero-length inputs.
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Dense seeker-by-provider similarity matrix
///
/// `matrix[i][j]` is the cosine similarity of seeker `i` against provider
/// `j`; rows follow seeker input order, columns provider input order.
pub fn score_matrix(seeker_vectors: &[Vec<f64>], provider_vectors: &[Vec<f64>]) -> Vec<Vec<f64>> {
    seeker_vectors
        .iter()
        .map(|seeker| {
            provider_vectors
                .iter()
                .map(|provider| cosine_similarity(seeker, provider))
                .collect()
        })
        .collect()
}
