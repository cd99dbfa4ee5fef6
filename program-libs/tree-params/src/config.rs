use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        MAX_CANOPY_DEPTH, MAX_LEAF_CAPACITY, PROOF_COST_DEPTH_THRESHOLD,
        PROOF_COST_MIN_CANOPY_DEPTH,
    },
    depth_size_pair::{is_valid_depth_size_pair, DepthSizePair},
    errors::TreeParamsError,
    size::{estimate_account_size, onchain_account_size, AccountSizeEstimate},
    validation::{ValidationError, ValidationErrors, ValidationWarning},
};

/// Tree parameters as entered by the user, not validated yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfigCandidate {
    pub max_depth: u32,
    pub max_buffer_size: u32,
    pub canopy_depth: i64,
}

/// Tree parameters which passed [`TreeConfigCandidate::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeConfig {
    max_depth: u32,
    max_buffer_size: u32,
    canopy_depth: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedTree {
    pub config: TreeConfig,
    pub warnings: Vec<ValidationWarning>,
}

impl TreeConfigCandidate {
    pub fn new(max_depth: u32, max_buffer_size: u32, canopy_depth: i64) -> Self {
        Self {
            max_depth,
            max_buffer_size,
            canopy_depth,
        }
    }

    /// Runs all checks and collects every violation in order.
    pub fn validate(&self) -> Result<ValidatedTree, ValidationErrors> {
        let Self {
            max_depth,
            max_buffer_size,
            canopy_depth,
        } = *self;
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if !is_valid_depth_size_pair(max_depth, max_buffer_size) {
            errors.push(ValidationError::InvalidDepthSizePair {
                max_depth,
                max_buffer_size,
            });
        }
        if canopy_depth >= i64::from(max_depth) {
            errors.push(ValidationError::CanopyNotBelowDepth {
                canopy_depth,
                max_depth,
            });
        }
        if canopy_depth < 0 {
            errors.push(ValidationError::NegativeCanopy(canopy_depth));
        }
        if canopy_depth > i64::from(MAX_CANOPY_DEPTH) {
            errors.push(ValidationError::CanopyTooDeep(canopy_depth));
        }
        if !is_power_of_two(max_buffer_size) {
            errors.push(ValidationError::BufferNotPowerOfTwo(max_buffer_size));
        }

        let capacity = DepthSizePair::new(max_depth, max_buffer_size).leaf_capacity();
        if capacity > MAX_LEAF_CAPACITY {
            warnings.push(ValidationWarning::LeafCapacityExceeded { capacity });
        }
        if canopy_depth < i64::from(PROOF_COST_MIN_CANOPY_DEPTH)
            && max_depth > PROOF_COST_DEPTH_THRESHOLD
        {
            warnings.push(ValidationWarning::ExpensiveProofs {
                max_depth,
                canopy_depth: canopy_depth.max(0) as u32,
            });
        }

        if let Some(errors) = ValidationErrors::new(errors, warnings.clone()) {
            return Err(errors);
        }
        Ok(ValidatedTree {
            config: TreeConfig {
                max_depth,
                max_buffer_size,
                // 0 <= canopy_depth <= MAX_CANOPY_DEPTH after the checks above.
                canopy_depth: canopy_depth as u32,
            },
            warnings,
        })
    }
}

impl TreeConfig {
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn max_buffer_size(&self) -> u32 {
        self.max_buffer_size
    }

    pub fn canopy_depth(&self) -> u32 {
        self.canopy_depth
    }

    pub fn leaf_capacity(&self) -> u64 {
        DepthSizePair::new(self.max_depth, self.max_buffer_size).leaf_capacity()
    }

    pub fn estimate(&self) -> Result<AccountSizeEstimate, TreeParamsError> {
        estimate_account_size(self.max_depth, self.max_buffer_size, self.canopy_depth)
    }

    pub fn onchain_size(&self) -> Result<u64, TreeParamsError> {
        onchain_account_size(self.max_depth, self.max_buffer_size, self.canopy_depth)
    }
}

impl From<TreeConfig> for TreeConfigCandidate {
    fn from(config: TreeConfig) -> Self {
        Self::new(
            config.max_depth,
            config.max_buffer_size,
            i64::from(config.canopy_depth),
        )
    }
}

/// Zero is rejected, `0 & (0 - 1)` would wrap.
pub fn is_power_of_two(value: u32) -> bool {
    value != 0 && value & (value - 1) == 0
}
