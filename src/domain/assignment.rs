//! Column assignments
//!
//! A [`ColumnAssignment`] pairs a column name with the [`FieldKind`] whose
//! masking rule should be applied to it. Assignments are supplied once per
//! run, either as `column:function` pairs on the command line or from the
//! configuration file, and are consumed in the order given.

use crate::domain::errors::AssignmentError;
use crate::masking::FieldKind;
use serde::{Deserialize, Serialize};

/// A single (column, field kind) assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAssignment {
    /// Target column name
    pub column: String,
    /// Field kind selecting the masking rule
    pub kind: FieldKind,
}

impl ColumnAssignment {
    /// Create an assignment
    pub fn new(column: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            column: column.into(),
            kind,
        }
    }

    /// Parse a single `column:function` pair
    ///
    /// The function tag is matched case-insensitively. A column name may
    /// itself contain `:`; only the last separator splits the pair.
    ///
    /// # Errors
    ///
    /// Returns an [`AssignmentError`] if the separator is missing, the column
    /// name is empty, or the tag is not a known field kind. Callers report
    /// the error, skip the pair, and continue.
    pub fn parse(pair: &str) -> Result<Self, AssignmentError> {
        let (column, tag) = pair
            .rsplit_once(':')
            .ok_or_else(|| AssignmentError::InvalidFormat(pair.to_string()))?;
        let column = column.trim();
        if column.is_empty() {
            return Err(AssignmentError::EmptyColumn(pair.to_string()));
        }
        let kind = tag
            .parse::<FieldKind>()
            .map_err(|_| AssignmentError::UnknownFieldKind {
                pair: pair.to_string(),
                tag: tag.trim().to_ascii_lowercase(),
            })?;
        Ok(Self::new(column, kind))
    }
}

/// Parse a list of `column:function` pairs, skipping invalid ones
///
/// Invalid pairs are reported through a warning diagnostic and returned
/// separately so callers can surface them; the run continues with whatever
/// parsed successfully.
pub fn parse_assignments(pairs: &[String]) -> (Vec<ColumnAssignment>, Vec<AssignmentError>) {
    let mut assignments = Vec::with_capacity(pairs.len());
    let mut rejected = Vec::new();
    for pair in pairs {
        match ColumnAssignment::parse(pair) {
            Ok(assignment) => assignments.push(assignment),
            Err(err) => {
                tracing::warn!(pair = %pair, error = %err, "Skipping invalid column assignment");
                rejected.push(err);
            }
        }
    }
    (assignments, rejected)
}
