use serde::Serialize;

/// A combination of tree depth and changelog buffer size supported by the
/// account compression program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DepthSizePair {
    pub max_depth: u32,
    pub max_buffer_size: u32,
}

impl DepthSizePair {
    pub const fn new(max_depth: u32, max_buffer_size: u32) -> Self {
        Self {
            max_depth,
            max_buffer_size,
        }
    }

    /// Number of leaves the tree can hold.
    pub fn leaf_capacity(&self) -> u64 {
        1u64.checked_shl(self.max_depth).unwrap_or(u64::MAX)
    }
}

pub const ALL_DEPTH_SIZE_PAIRS: [DepthSizePair; 26] = [
    DepthSizePair::new(3, 8),
    DepthSizePair::new(5, 8),
    DepthSizePair::new(14, 64),
    DepthSizePair::new(14, 256),
    DepthSizePair::new(14, 1024),
    DepthSizePair::new(14, 2048),
    DepthSizePair::new(15, 64),
    DepthSizePair::new(16, 64),
    DepthSizePair::new(17, 64),
    DepthSizePair::new(18, 64),
    DepthSizePair::new(19, 64),
    DepthSizePair::new(20, 64),
    DepthSizePair::new(20, 256),
    DepthSizePair::new(20, 1024),
    DepthSizePair::new(20, 2048),
    DepthSizePair::new(24, 64),
    DepthSizePair::new(24, 256),
    DepthSizePair::new(24, 512),
    DepthSizePair::new(24, 1024),
    DepthSizePair::new(24, 2048),
    DepthSizePair::new(26, 512),
    DepthSizePair::new(26, 1024),
    DepthSizePair::new(26, 2048),
    DepthSizePair::new(30, 512),
    DepthSizePair::new(30, 1024),
    DepthSizePair::new(30, 2048),
];

pub fn is_valid_depth_size_pair(max_depth: u32, max_buffer_size: u32) -> bool {
    ALL_DEPTH_SIZE_PAIRS.contains(&DepthSizePair::new(max_depth, max_buffer_size))
}
