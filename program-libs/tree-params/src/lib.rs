//! Parameters of compressed NFT concurrent Merkle trees: the permitted
//! depth/buffer combinations, validation of user input, account size and
//! rent estimates, and detection of the cluster behind an RPC endpoint.
//!
//! Everything in this crate is pure, nothing performs I/O.

pub mod config;
pub mod constants;
pub mod depth_size_pair;
pub mod errors;
pub mod network;
pub mod size;
pub mod validation;

pub use config::{is_power_of_two, TreeConfig, TreeConfigCandidate, ValidatedTree};
pub use depth_size_pair::{is_valid_depth_size_pair, DepthSizePair, ALL_DEPTH_SIZE_PAIRS};
pub use errors::TreeParamsError;
pub use network::Network;
pub use size::{estimate_account_size, onchain_account_size, AccountSizeEstimate};
pub use validation::{ValidationError, ValidationErrors, ValidationWarning};
