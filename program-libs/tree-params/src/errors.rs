use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeParamsError {
    #[error("Account too large: {size} bytes exceeds the maximum of {max} bytes")]
    AccountTooLarge { size: u64, max: u64 },
    /// The size does not fit into a `u64`, which is too large as well.
    #[error("Account too large: size overflows for depth {max_depth} and canopy depth {canopy_depth}")]
    SizeOverflow { max_depth: u32, canopy_depth: u32 },
}
