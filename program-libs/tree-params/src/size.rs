use serde::Serialize;

use crate::{
    constants::{
        ACCOUNT_COMPRESSION_HEADER_SIZE, CONCURRENT_MERKLE_TREE_META_SIZE, ESTIMATE_HEADER_SIZE,
        LAMPORTS_PER_SOL, MAX_ACCOUNT_SIZE, NODE_SIZE, PATH_INDEX_SIZE,
        RENT_EXEMPT_LAMPORTS_PER_BYTE,
    },
    errors::TreeParamsError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountSizeEstimate {
    pub size_bytes: u64,
    pub rent_lamports: u64,
}

impl AccountSizeEstimate {
    pub fn rent_sol(&self) -> f64 {
        self.rent_lamports as f64 / LAMPORTS_PER_SOL as f64
    }
}

/// Estimates the size and rent of a tree account.
///
/// size = header + 2^(max_depth + 1) * 32 + max_buffer_size * 32
///        + (canopy_depth > 0 ? 2^canopy_depth * 32 : 0)
///
/// This is a simplified layout and is not bit-exact with the account
/// compression program, see [`onchain_account_size`] for that. Sizes above
/// [`MAX_ACCOUNT_SIZE`] are rejected with [`TreeParamsError::AccountTooLarge`].
pub fn estimate_account_size(
    max_depth: u32,
    max_buffer_size: u32,
    canopy_depth: u32,
) -> Result<AccountSizeEstimate, TreeParamsError> {
    let overflow = || TreeParamsError::SizeOverflow {
        max_depth,
        canopy_depth,
    };
    let tree_nodes = max_depth
        .checked_add(1)
        .and_then(pow2)
        .ok_or_else(overflow)?;
    let tree = tree_nodes.checked_mul(NODE_SIZE).ok_or_else(overflow)?;
    let buffer = u64::from(max_buffer_size) * NODE_SIZE;
    let canopy = if canopy_depth > 0 {
        pow2(canopy_depth)
            .and_then(|nodes| nodes.checked_mul(NODE_SIZE))
            .ok_or_else(overflow)?
    } else {
        0
    };

    let size_bytes = [ESTIMATE_HEADER_SIZE, tree, buffer, canopy]
        .into_iter()
        .try_fold(0u64, u64::checked_add)
        .ok_or_else(overflow)?;
    check_size(size_bytes)?;

    Ok(AccountSizeEstimate {
        size_bytes,
        rent_lamports: rent_exempt_lamports(size_bytes),
    })
}

/// Exact size of a concurrent Merkle tree account as allocated by the
/// account compression program:
///
/// * account header,
/// * tree metadata (`sequence_number`, `active_index`, `buffer_size`),
/// * `max_buffer_size` changelog entries, each a root, a path of
///   `max_depth` nodes and an index,
/// * the rightmost proof (path, leaf and index),
/// * `2^(canopy_depth + 1) - 2` canopy nodes.
pub fn onchain_account_size(
    max_depth: u32,
    max_buffer_size: u32,
    canopy_depth: u32,
) -> Result<u64, TreeParamsError> {
    let overflow = || TreeParamsError::SizeOverflow {
        max_depth,
        canopy_depth,
    };
    let depth = u64::from(max_depth);
    let path = depth * NODE_SIZE;
    let changelog_entry = NODE_SIZE + path + PATH_INDEX_SIZE;
    let changelog = u64::from(max_buffer_size)
        .checked_mul(changelog_entry)
        .ok_or_else(overflow)?;
    let rightmost_proof = path + NODE_SIZE + PATH_INDEX_SIZE;
    let canopy = if canopy_depth > 0 {
        canopy_depth
            .checked_add(1)
            .and_then(pow2)
            .and_then(|nodes| (nodes - 2).checked_mul(NODE_SIZE))
            .ok_or_else(overflow)?
    } else {
        0
    };

    [
        ACCOUNT_COMPRESSION_HEADER_SIZE,
        CONCURRENT_MERKLE_TREE_META_SIZE,
        changelog,
        rightmost_proof,
        canopy,
    ]
    .into_iter()
    .try_fold(0u64, u64::checked_add)
    .ok_or_else(overflow)
}

/// Lamports to keep `size_bytes` rent exempt at the default rent parameters.
pub fn rent_exempt_lamports(size_bytes: u64) -> u64 {
    size_bytes.saturating_mul(RENT_EXEMPT_LAMPORTS_PER_BYTE)
}

fn check_size(size: u64) -> Result<(), TreeParamsError> {
    if size > MAX_ACCOUNT_SIZE {
        return Err(TreeParamsError::AccountTooLarge {
            size,
            max: MAX_ACCOUNT_SIZE,
        });
    }
    Ok(())
}

fn pow2(exponent: u32) -> Option<u64> {
    1u64.checked_shl(exponent)
}
