//! JSON query documents
//!
//! ```json
//! { "present": [{"char": "a", "position": 1}, {"char": "o"}],
//!   "absent":  ["t", {"char": "r", "position": 2}] }
//! ```
//!
//! A missing or `null` position means any slot; a bare string is shorthand
//! for an any-slot constraint.

use super::constraint::{Constraint, Query};
use crate::error::{IndexError, Result};
use serde::Deserialize;

/// One entry of a JSON constraint list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConstraintSpec {
    Letter(String),
    Pinned(PinnedSpec),
}

/// Object form of a constraint; unknown keys such as `pos` are rejected
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PinnedSpec {
    #[serde(rename = "char")]
    pub letter: String,
    #[serde(default)]
    pub position: Option<i64>,
}

/// Wire form of a query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryRequest {
    #[serde(default)]
    pub present: Vec<ConstraintSpec>,
    #[serde(default, alias = "notPresent")]
    pub absent: Vec<ConstraintSpec>,
}

impl QueryRequest {
    /// Parse a JSON document
    ///
    /// # Errors
    /// Returns `InvalidConstraint` when the document is not valid JSON or
    /// does not follow the query shape.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| IndexError::invalid_constraint(format!("malformed query document: {e}")))
    }
}

impl TryFrom<&ConstraintSpec> for Constraint {
    type Error = IndexError;

    fn try_from(spec: &ConstraintSpec) -> Result<Self> {
        let (text, position) = match spec {
            ConstraintSpec::Letter(text) => (text, None),
            ConstraintSpec::Pinned(PinnedSpec { letter, position }) => (letter, *position),
        };

        let mut chars = text.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => {
                return Err(IndexError::invalid_constraint(format!(
                    "'{text}' is not a single letter"
                )));
            }
        };

        match position {
            Some(position) => Self::at(ch, position),
            None => Self::anywhere(ch),
        }
    }
}

impl TryFrom<QueryRequest> for Query {
    type Error = IndexError;

    fn try_from(request: QueryRequest) -> Result<Self> {
        let convert = |specs: &[ConstraintSpec]| -> Result<Vec<Constraint>> {
            specs.iter().map(Constraint::try_from).collect()
        };
        Ok(Self::from_parts(
            convert(&request.present)?,
            convert(&request.absent)?,
        ))
    }
}
