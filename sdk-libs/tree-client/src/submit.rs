use std::sync::Arc;

use async_trait::async_trait;
use cnft_tree_params::TreeConfig;
use serde::Serialize;
use solana_sdk::{
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use tracing::{debug, info};

use crate::{
    errors::SubmissionError,
    instructions::{
        create_tree_account_instruction, create_tree_instruction, get_tree_config_address,
        CreateTreeArgs,
    },
    rpc::TreeRpc,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationResult {
    pub signature: String,
    pub tree_address: String,
    pub tree_config_address: String,
}

/// Creates the tree account on behalf of `payer`. Implementations own key
/// generation, transaction construction, signing and broadcast.
#[async_trait]
pub trait TreeSubmitter: Send + Sync {
    async fn create_tree(
        &self,
        config: &TreeConfig,
        payer: &Keypair,
    ) -> Result<CreationResult, SubmissionError>;
}

#[derive(Debug)]
pub struct BubblegumTreeSubmitter<R: TreeRpc> {
    rpc: Arc<R>,
    public: bool,
}

impl<R: TreeRpc> BubblegumTreeSubmitter<R> {
    pub fn new(rpc: Arc<R>, public: bool) -> Self {
        Self { rpc, public }
    }
}

#[async_trait]
impl<R: TreeRpc> TreeSubmitter for BubblegumTreeSubmitter<R> {
    async fn create_tree(
        &self,
        config: &TreeConfig,
        payer: &Keypair,
    ) -> Result<CreationResult, SubmissionError> {
        let size = config
            .onchain_size()
            .map_err(|e| SubmissionError::Failed(e.to_string()))?;
        let lamports = self
            .rpc
            .get_minimum_balance_for_rent_exemption(size as usize)
            .await?;

        let balance = self.rpc.get_balance(&payer.pubkey()).await?;
        if balance < lamports {
            return Err(SubmissionError::InsufficientBalance(format!(
                "payer {} holds {} lamports, the tree account needs {}",
                payer.pubkey(),
                balance,
                lamports
            )));
        }

        let merkle_tree = Keypair::new();
        let (tree_config, _) = get_tree_config_address(&merkle_tree.pubkey());
        info!(
            "Creating tree {} (config {}): depth {}, buffer {}, canopy {}, {} bytes, {} lamports",
            merkle_tree.pubkey(),
            tree_config,
            config.max_depth(),
            config.max_buffer_size(),
            config.canopy_depth(),
            size,
            lamports
        );

        let instructions = vec![
            create_tree_account_instruction(&payer.pubkey(), &merkle_tree.pubkey(), size, lamports),
            create_tree_instruction(
                &payer.pubkey(),
                &merkle_tree.pubkey(),
                CreateTreeArgs {
                    max_depth: config.max_depth(),
                    max_buffer_size: config.max_buffer_size(),
                    public: Some(self.public),
                },
            )
            .map_err(|e| SubmissionError::Failed(e.to_string()))?,
        ];

        let latest_blockhash = self.rpc.get_latest_blockhash().await?;
        let transaction = Transaction::new_signed_with_payer(
            &instructions,
            Some(&payer.pubkey()),
            &[payer, &merkle_tree],
            latest_blockhash,
        );
        let signature = self.rpc.send_and_confirm_transaction(&transaction).await?;
        debug!("Tree creation confirmed: {}", signature);

        Ok(CreationResult {
            signature: signature.to_string(),
            tree_address: merkle_tree.pubkey().to_string(),
            tree_config_address: tree_config.to_string(),
        })
    }
}
