//! Campus Match - textual-similarity assignment engine
//!
//! This library assigns each "seeker" entity (e.g., a student) to the one
//! "provider" entity (e.g., a mentor or internship) whose text attributes are
//! most similar. One call builds a joint TF-IDF feature space over both
//! collections, scores every pair with cosine similarity, and picks a
//! per-seeker argmax with a deterministic first-index tie-break.
//!
//! The engine is pure and stateless across calls; the hosting service owns
//! parsing, serialization, and error-to-response mapping.

pub mod core;
pub mod models;

// Re-export commonly used types
pub use self::core::{cosine_similarity, AssignError, Assigner, AssignmentMap, FeatureSpace, Role};
pub use self::models::{AttributeValue, Entity};
