use std::sync::Arc;

use cnft_tree_params::{
    AccountSizeEstimate, Network, TreeConfigCandidate, TreeParamsError, ValidatedTree,
    ValidationErrors,
};
use solana_sdk::signature::Keypair;
use tracing::{info, warn};

use crate::{
    errors::{ReachabilityError, SessionError},
    reachability::{check_endpoint, EndpointStatus},
    rpc::TreeRpc,
    submit::{CreationResult, TreeSubmitter},
};

/// State of one tree creation session. Submitting is only possible once the
/// endpoint answered and the parameters passed validation; changing either
/// drops what was established before.
#[derive(Debug)]
pub struct TreeSession<R: TreeRpc, S: TreeSubmitter> {
    rpc: Arc<R>,
    submitter: S,
    network: Network,
    endpoint_status: Option<EndpointStatus>,
    validated: Option<ValidatedTree>,
}

impl<R: TreeRpc, S: TreeSubmitter> TreeSession<R, S> {
    pub fn new(rpc: Arc<R>, submitter: S) -> Self {
        let network = Network::detect(&rpc.url());
        Self {
            rpc,
            submitter,
            network,
            endpoint_status: None,
            validated: None,
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn endpoint_status(&self) -> Option<&EndpointStatus> {
        self.endpoint_status.as_ref()
    }

    pub fn validated(&self) -> Option<&ValidatedTree> {
        self.validated.as_ref()
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Switches to another endpoint, which has to be verified again.
    pub fn set_endpoint(&mut self, rpc: Arc<R>, submitter: S) {
        self.network = Network::detect(&rpc.url());
        self.rpc = rpc;
        self.submitter = submitter;
        self.endpoint_status = None;
    }

    pub async fn verify_endpoint(&mut self) -> Result<&EndpointStatus, ReachabilityError> {
        self.endpoint_status = None;
        let status = check_endpoint(self.rpc.as_ref()).await?;
        self.network = status.network;
        Ok(self.endpoint_status.insert(status))
    }

    pub fn set_params(
        &mut self,
        candidate: TreeConfigCandidate,
    ) -> Result<&ValidatedTree, ValidationErrors> {
        self.validated = None;
        let validated = candidate.validate()?;
        for warning in validated.warnings.iter() {
            warn!("{}", warning);
        }
        Ok(self.validated.insert(validated))
    }

    /// Estimate for the current parameters, `None` until they are validated.
    pub fn estimate(&self) -> Option<Result<AccountSizeEstimate, TreeParamsError>> {
        self.validated
            .as_ref()
            .map(|validated| validated.config.estimate())
    }

    /// Submits the validated parameters. They are consumed by the attempt,
    /// successful or not.
    pub async fn submit(&mut self, payer: &Keypair) -> Result<CreationResult, SessionError> {
        if self.endpoint_status.is_none() {
            return Err(SessionError::EndpointNotVerified);
        }
        let validated = self
            .validated
            .take()
            .ok_or(SessionError::ParamsNotValidated)?;
        let estimate = validated.config.estimate()?;
        info!(
            "Submitting tree on {}: estimated {} bytes, {:.6} SOL rent",
            self.network,
            estimate.size_bytes,
            estimate.rent_sol()
        );

        let result = self
            .submitter
            .create_tree(&validated.config, payer)
            .await
            .map_err(|e| {
                warn!("Tree creation failed: {}", e);
                e
            })?;
        info!(
            "Created tree {} with config {} in {}",
            result.tree_address, result.tree_config_address, result.signature
        );
        Ok(result)
    }
}
