//! Relation module - pairwise associations reported by the analytics service

use crate::{ElementKey, ParameterKey};

/// A pairwise relation between a source parameter and a related parameter
///
/// The confidence is whatever the analytics service reports; no range is
/// enforced here.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    /// Source parameter ("A")
    pub source: ParameterKey,

    /// Related parameter ("B")
    pub related: ParameterKey,

    /// Strength of the relation
    pub confidence: f64,
}

impl Relation {
    /// Create a new relation
    pub fn new(source: ParameterKey, related: ParameterKey, confidence: f64) -> Self {
        Self {
            source,
            related,
            confidence,
        }
    }

    /// The element the relation is scoped under
    ///
    /// The analytics service scopes element identity by the related
    /// parameter's system id and the source parameter's element id.
    pub fn hosting_element(&self) -> ElementKey {
        ElementKey::new(self.related.system_id(), self.source.element_id())
    }
}
