//! Client side of compressed NFT tree creation: checks that an RPC endpoint
//! answers, classifies the errors of the cluster and the signer, and submits
//! the Bubblegum `create_tree` transaction.
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use cnft_tree_client::{BubblegumTreeSubmitter, SolanaTreeRpc, TreeSession};
//! # use cnft_tree_params::TreeConfigCandidate;
//! # use solana_sdk::signature::Keypair;
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let rpc = Arc::new(SolanaTreeRpc::new("https://api.devnet.solana.com", None));
//! let submitter = BubblegumTreeSubmitter::new(rpc.clone(), false);
//! let mut session = TreeSession::new(rpc, submitter);
//! session.verify_endpoint().await?;
//! session.set_params(TreeConfigCandidate::new(14, 64, 10))?;
//! let result = session.submit(&Keypair::new()).await?;
//! println!("{}", result.tree_address);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod instructions;
pub mod reachability;
pub mod rpc;
pub mod session;
pub mod submit;

pub use errors::{ReachabilityError, RpcError, SessionError, SubmissionError};
pub use reachability::{check_endpoint, EndpointStatus};
pub use rpc::{SolanaTreeRpc, TreeRpc};
pub use session::TreeSession;
pub use submit::{BubblegumTreeSubmitter, CreationResult, TreeSubmitter};
