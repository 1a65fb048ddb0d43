use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::Entity;

/// Tokens shorter than this are dropped during tokenization
const MIN_TOKEN_LEN: usize = 2;

/// Lowercase a text and split it into alphanumeric tokens
///
/// Single-character fragments are discarded; everything that is not a letter
/// or digit acts as a separator.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(|t| t.to_lowercase())
        .collect()
}

/// Join an entity's values under `keys` into one document string
///
/// Keys are visited in the order given; absent keys are skipped silently.
/// Token-sequence values join with single spaces. An entity with none of the
/// keys present yields an empty document (valid input, not an error).
pub fn document_text(entity: &Entity, keys: &[String]) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(keys.len());

    for key in keys {
        if let Some(value) = entity.attributes.get(key) {
            let fragment = value.joined();
            if !fragment.trim().is_empty() {
                parts.push(fragment);
            }
        }
    }

    parts.join(" ")
}

/// Joint vocabulary and IDF weights for one assignment computation
///
/// Built from the combined seeker + provider corpus and discarded when the
/// call returns; never cached across calls. Vocabulary columns are assigned
/// in sorted term order, so two fits over the same corpus produce identical
/// axes.
#[derive(Debug, Clone)]
pub struct FeatureSpace {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl FeatureSpace {
    /// Build the feature space from a document corpus.
    ///
    /// IDF uses the smoothed form `ln((1 + n) / (1 + df)) + 1`, which stays
    /// finite both for terms in every document and for terms in exactly one.
    pub fn fit(corpus: &[String]) -> Self {
        let n_docs = corpus.len() as f64;

        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for doc in corpus {
            let unique: BTreeSet<String> = tokenize(doc).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut vocabulary = HashMap::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (column, (term, df)) in doc_freq.into_iter().enumerate() {
            idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, column);
        }

        Self { vocabulary, idf }
    }

    /// Vectorize one document: raw term count times IDF per vocabulary column.
    ///
    /// Terms outside the vocabulary are ignored; an empty document produces a
    /// zero vector.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.idf.len()];
        for token in tokenize(text) {
            if let Some(&column) = self.vocabulary.get(&token) {
                vector[column] += self.idf[column];
            }
        }
        vector
    }

    /// Dimensionality of the vector space (vocabulary size).
    pub fn dimensions(&self) -> usize {
        self.idf.len()
    }
}

/// Fit a feature space over both collections' documents and vectorize them
///
/// The joint corpus is all seeker documents first, then all provider
/// documents; the resulting matrix is split back into the two blocks along
/// that boundary.
pub fn vectorize(
    seeker_docs: &[String],
    provider_docs: &[String],
) -> (Vec<Vec<f64>>, Vec<Vec<f64>>, FeatureSpace) {
    let corpus: Vec<String> = seeker_docs
        .iter()
        .chain(provider_docs.iter())
        .cloned()
        .collect();

    let space = FeatureSpace::fit(&corpus);

    let seeker_vectors = seeker_docs.iter().map(|d| space.transform(d)).collect();
    let provider_vectors = provider_docs.iter().map(|d| space.transform(d)).collect();

    (seeker_vectors, provider_vectors, space)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        let tokens = tokenize("Machine-Learning, NLP and Python3!");
        assert_eq!(tokens, vec!["machine", "learning", "nlp", "and", "python3"]);
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        let tokens = tokenize("a b cd e fg");
        assert_eq!(tokens, vec!["cd", "fg"]);
    }

    #[test]
    fn test_document_text_key_order_and_missing_keys() {
        let entity = Entity::new("s1")
            .with_tokens("skills", ["python", "ml"])
            .with_text("interests", "search engines");

        let keys = vec![
            "interests".to_string(),
            "missing".to_string(),
            "skills".to_string(),
        ];
        assert_eq!(document_text(&entity, &keys), "search engines python ml");
    }

    #[test]
    fn test_document_text_no_matching_keys_is_empty() {
        let entity = Entity::new("s1").with_tokens("skills", ["python"]);
        let keys = vec!["hobbies".to_string()];
        assert_eq!(document_text(&entity, &keys), "");
    }

    #[test]
    fn test_fit_is_deterministic() {
        let corpus = vec![
            "python ml".to_string(),
            "python web".to_string(),
            "rust systems".to_string(),
        ];

        let a = FeatureSpace::fit(&corpus);
        let b = FeatureSpace::fit(&corpus);

        assert_eq!(a.dimensions(), b.dimensions());
        for doc in &corpus {
            assert_eq!(a.transform(doc), b.transform(doc));
        }
    }

    #[test]
    fn test_idf_is_finite_at_the_extremes() {
        // "python" is in every document, "rust" in exactly one.
        let corpus = vec![
            "python ml".to_string(),
            "python web".to_string(),
            "python rust".to_string(),
        ];
        let space = FeatureSpace::fit(&corpus);

        for doc in &corpus {
            for weight in space.transform(doc) {
                assert!(weight.is_finite());
            }
        }

        // The singleton term must weigh more than the ubiquitous one.
        let rare = space.transform("rust");
        let common = space.transform("python");
        let rare_max = rare.iter().cloned().fold(0.0, f64::max);
        let common_max = common.iter().cloned().fold(0.0, f64::max);
        assert!(rare_max > common_max);
    }

    #[test]
    fn test_transform_counts_repeated_terms() {
        let corpus = vec!["python python ml".to_string(), "java".to_string()];
        let space = FeatureSpace::fit(&corpus);

        let once = space.transform("python");
        let twice = space.transform("python python");
        let sum_once: f64 = once.iter().sum();
        let sum_twice: f64 = twice.iter().sum();
        assert!((sum_twice - 2.0 * sum_once).abs() < 1e-12);
    }

    #[test]
    fn test_empty_document_is_zero_vector() {
        let corpus = vec!["python ml".to_string(), "".to_string()];
        let space = FeatureSpace::fit(&corpus);

        let vector = space.transform("");
        assert_eq!(vector.len(), space.dimensions());
        assert!(vector.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_vectorize_splits_blocks_in_order() {
        let seekers = vec!["python ml".to_string(), "rust".to_string()];
        let providers = vec!["python web".to_string()];

        let (seeker_vecs, provider_vecs, space) = vectorize(&seekers, &providers);

        assert_eq!(seeker_vecs.len(), 2);
        assert_eq!(provider_vecs.len(), 1);
        for vector in seeker_vecs.iter().chain(provider_vecs.iter()) {
            assert_eq!(vector.len(), space.dimensions());
        }
    }
}
