/// Index of the highest score in one seeker's row of the score matrix
///
/// Ties go to the lowest index (first occurrence in provider input order), so
/// repeated runs over identical input always pick the same provider. Returns
/// `None` only for an empty row.
pub fn select_best(scores: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, &score) in scores.iter().enumerate() {
        match best {
            // Strict comparison keeps the earliest index on ties.
            Some((_, best_score)) if score > best_score => best = Some((index, score)),
            Some(_) => {}
            None => best = Some((index, score)),
        }
    }

    best.map(|(index, _)| index)
}
