use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::constants::{MAX_CANOPY_DEPTH, MAX_LEAF_CAPACITY};

/// A violated tree parameter constraint. Every violation is reported, the
/// validator never stops at the first one.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    #[error("Invalid combination: max depth {max_depth} with max buffer size {max_buffer_size} is not supported")]
    InvalidDepthSizePair {
        max_depth: u32,
        max_buffer_size: u32,
    },
    #[error("Canopy depth {canopy_depth} must be less than max depth {max_depth}")]
    CanopyNotBelowDepth { canopy_depth: i64, max_depth: u32 },
    #[error("Canopy depth {0} must not be negative")]
    NegativeCanopy(i64),
    #[error("Canopy depth {0} exceeds the maximum of {max}", max = MAX_CANOPY_DEPTH)]
    CanopyTooDeep(i64),
    #[error("Max buffer size {0} must be a power of two")]
    BufferNotPowerOfTwo(u32),
}

/// Advisory findings which do not block creating the tree.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
pub enum ValidationWarning {
    #[error("Leaf capacity {capacity} exceeds the recommended maximum of {max}", max = MAX_LEAF_CAPACITY)]
    LeafCapacityExceeded { capacity: u64 },
    #[error("Canopy depth {canopy_depth} with max depth {max_depth} leaves long proofs, verifying them will be expensive")]
    ExpensiveProofs { max_depth: u32, canopy_depth: u32 },
}

/// Non-empty, ordered list of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl ValidationErrors {
    /// Returns `None` when there is nothing to report.
    pub(crate) fn new(
        errors: Vec<ValidationError>,
        warnings: Vec<ValidationWarning>,
    ) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        Some(Self { errors, warnings })
    }

    /// The error shown prominently.
    pub fn first(&self) -> &ValidationError {
        &self.errors[0]
    }

    /// Number of errors after the first one.
    pub fn remaining(&self) -> usize {
        self.errors.len() - 1
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn contains(&self, error: &ValidationError) -> bool {
        self.errors.contains(error)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first())?;
        match self.remaining() {
            0 => Ok(()),
            1 => write!(f, " (and 1 more error)"),
            n => write!(f, " (and {} more errors)", n),
        }
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_not_an_error() {
        assert!(ValidationErrors::new(vec![], vec![]).is_none());
    }

    #[test]
    fn test_summary_shows_first_and_count() {
        let errors = ValidationErrors::new(
            vec![
                ValidationError::BufferNotPowerOfTwo(100),
                ValidationError::NegativeCanopy(-1),
                ValidationError::CanopyTooDeep(40),
            ],
            vec![],
        )
        .unwrap();
        assert_eq!(errors.first(), &ValidationError::BufferNotPowerOfTwo(100));
        assert_eq!(errors.remaining(), 2);
        assert_eq!(
            errors.to_string(),
            "Max buffer size 100 must be a power of two (and 2 more errors)"
        );

        let single = ValidationErrors::new(vec![ValidationError::NegativeCanopy(-3)], vec![])
            .unwrap();
        assert_eq!(single.to_string(), "Canopy depth -3 must not be negative");
    }
}
