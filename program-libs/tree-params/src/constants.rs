// This file stores constants which do not have to be configured.

/// Hash and node size of the concurrent Merkle tree.
pub const NODE_SIZE: u64 = 32;

/// Header which precedes the tree in the estimated account layout.
pub const ESTIMATE_HEADER_SIZE: u64 = 64;

/// Largest canopy the compression program accepts for a single account.
pub const MAX_CANOPY_DEPTH: u32 = 17;

/// Soft ceiling on the leaf capacity (`2^max_depth`) of a tree.
pub const MAX_LEAF_CAPACITY: u64 = 1_000_000_000;

/// Trees deeper than this carry long proofs unless enough of the canopy is
/// stored on-chain.
pub const PROOF_COST_DEPTH_THRESHOLD: u32 = 20;
pub const PROOF_COST_MIN_CANOPY_DEPTH: u32 = 10;

/// Accounts above this size are rejected before anything is sent.
pub const MAX_ACCOUNT_SIZE: u64 = 10 * 1024 * 1024;

/// `rent::DEFAULT_LAMPORTS_PER_BYTE_YEAR * rent::DEFAULT_EXEMPTION_THRESHOLD`.
pub const RENT_EXEMPT_LAMPORTS_PER_BYTE: u64 = 3_480 * 2;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

// On-chain layout of spl-account-compression.
pub const ACCOUNT_COMPRESSION_HEADER_SIZE: u64 = 56;
/// `sequence_number`, `active_index` and `buffer_size`.
pub const CONCURRENT_MERKLE_TREE_META_SIZE: u64 = 24;
/// Leaf index and padding stored with every changelog entry and proof.
pub const PATH_INDEX_SIZE: u64 = 8;
