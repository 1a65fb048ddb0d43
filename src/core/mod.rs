// Core algorithm exports
pub mod engine;
pub mod featurizer;
pub mod selector;
pub mod similarity;

pub use engine::{AssignError, Assigner, AssignmentMap, Role};
pub use featurizer::{document_text, tokenize, FeatureSpace};
pub use selector::select_best;
pub use similarity::{cosine_similarity, score_matrix};
