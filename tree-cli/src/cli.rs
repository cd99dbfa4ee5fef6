use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cnft_tree_params::{Network, TreeConfigCandidate};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print machine readable JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lists the supported max depth / max buffer size combinations.
    Pairs,
    /// Validates tree parameters.
    Validate(TreeArgs),
    /// Estimates account size and rent of a tree.
    Estimate(TreeArgs),
    /// Detects the network an RPC endpoint belongs to.
    Network(NetworkArgs),
    /// Checks that an RPC endpoint answers.
    Ping(EndpointArgs),
    /// Validates the parameters and creates the tree.
    Create(CreateArgs),
}

#[derive(Parser, Clone, Debug)]
pub struct TreeArgs {
    #[arg(long, env = "CNFT_MAX_DEPTH")]
    pub max_depth: u32,

    #[arg(long, env = "CNFT_MAX_BUFFER_SIZE")]
    pub max_buffer_size: u32,

    #[arg(
        long,
        env = "CNFT_CANOPY_DEPTH",
        default_value = "0",
        allow_negative_numbers = true
    )]
    pub canopy_depth: i64,
}

#[derive(Parser, Clone, Debug)]
pub struct NetworkArgs {
    pub endpoint: String,
}

#[derive(Parser, Clone, Debug)]
pub struct EndpointArgs {
    #[arg(long, env = "CNFT_RPC_URL")]
    pub rpc_url: Option<String>,

    /// devnet or mainnet, used when no RPC URL is given.
    #[arg(long)]
    pub network: Option<Network>,
}

#[derive(Parser, Clone, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    #[command(flatten)]
    pub endpoint: EndpointArgs,

    /// Keypair file of the payer, default: ~/.config/solana/id.json
    #[arg(long, env = "CNFT_PAYER")]
    pub payer: Option<PathBuf>,

    /// Allow anyone to mint into the tree.
    #[arg(long)]
    pub public: bool,
}

impl From<&TreeArgs> for TreeConfigCandidate {
    fn from(args: &TreeArgs) -> Self {
        TreeConfigCandidate::new(args.max_depth, args.max_buffer_size, args.canopy_depth)
    }
}
