use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::core::{featurizer, selector::select_best, similarity::score_matrix};
use crate::models::Entity;

/// Seeker id to provider id, one entry per seeker. Not guaranteed injective:
/// several seekers may land on the same provider.
pub type AssignmentMap = HashMap<String, String>;

/// Which side of the matching an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Seeker,
    Provider,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Seeker => write!(f, "seeker"),
            Role::Provider => write!(f, "provider"),
        }
    }
}

/// Errors raised by the assignment engine
///
/// Display strings are written to be usable directly as client-facing
/// messages by the hosting layer.
#[derive(Debug, Error)]
pub enum AssignError {
    #[error("no {0} entities provided")]
    EmptyCollection(Role),

    #[error("{role} at position {position} has no usable id")]
    MalformedEntity { role: Role, position: usize },

    #[error("duplicate seeker id: {0}")]
    DuplicateId(String),
}

/// Assignment engine: featurize both collections, score every seeker-provider
/// pair, then greedily pick each seeker's best provider
///
/// Each seeker is assigned independently; there is no mutual-exclusion or
/// bijectivity constraint, and no seeker's outcome depends on another's. The
/// engine holds no state across calls (each call builds its own feature
/// space), so one `Assigner` can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Assigner {
    seeker_keys: Vec<String>,
    provider_keys: Vec<String>,
}

impl Assigner {
    /// Create an engine with per-role attribute-key profiles.
    ///
    /// Keys name the text attributes included in each entity's document, in
    /// the order given. The two original call sites differ only here:
    /// mentors use `["skills", "interests"]` against
    /// `["areasOfExpertise", "researchInterests"]`, internships pair other
    /// keys.
    pub fn new<I, J, S, T>(seeker_keys: I, provider_keys: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            seeker_keys: seeker_keys.into_iter().map(Into::into).collect(),
            provider_keys: provider_keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Assign every seeker its best-matching provider.
    ///
    /// Fails fast on empty collections, blank ids, or duplicate seeker ids;
    /// no partial map is ever returned. A seeker whose document is empty
    /// scores 0 against every provider and falls to the first provider under
    /// the tie-break rule, which is still a valid assignment.
    pub fn assign(
        &self,
        seekers: &[Entity],
        providers: &[Entity],
    ) -> Result<AssignmentMap, AssignError> {
        validate_ids(seekers, Role::Seeker)?;
        validate_ids(providers, Role::Provider)?;
        reject_duplicate_seekers(seekers)?;

        let seeker_docs: Vec<String> = seekers
            .iter()
            .map(|entity| featurizer::document_text(entity, &self.seeker_keys))
            .collect();
        let provider_docs: Vec<String> = providers
            .iter()
            .map(|entity| featurizer::document_text(entity, &self.provider_keys))
            .collect();

        let (seeker_vectors, provider_vectors, space) =
            featurizer::vectorize(&seeker_docs, &provider_docs);

        debug!(
            seekers = seekers.len(),
            providers = providers.len(),
            dimensions = space.dimensions(),
            "built feature space"
        );

        let scores = score_matrix(&seeker_vectors, &provider_vectors);

        let mut assignments = AssignmentMap::with_capacity(seekers.len());
        for (row, seeker) in scores.iter().zip(seekers.iter()) {
            let best = select_best(row).ok_or(AssignError::EmptyCollection(Role::Provider))?;
            assignments.insert(seeker.id.clone(), providers[best].id.clone());
        }

        debug!(assignments = assignments.len(), "assignment complete");

        Ok(assignments)
    }
}

/// Reject empty collections and blank ids up front.
fn validate_ids(entities: &[Entity], role: Role) -> Result<(), AssignError> {
    if entities.is_empty() {
        return Err(AssignError::EmptyCollection(role));
    }

    for (position, entity) in entities.iter().enumerate() {
        if entity.id.trim().is_empty() {
            return Err(AssignError::MalformedEntity { role, position });
        }
    }

    Ok(())
}

/// A repeated seeker id would silently overwrite an earlier assignment in the
/// result map, so it fails the whole call instead. Providers are only ever
/// read, so duplicates on that side are allowed.
fn reject_duplicate_seekers(seekers: &[Entity]) -> Result<(), AssignError> {
    let mut seen = HashSet::with_capacity(seekers.len());
    for seeker in seekers {
        if !seen.insert(seeker.id.as_str()) {
            return Err(AssignError::DuplicateId(seeker.id.clone()));
        }
    }
    Ok(())
}
